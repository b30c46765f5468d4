//! Node graph extracted from a triangle soup
//!
//! Coincident triangle corners collapse into a single node. Every triangle
//! edge becomes an undirected, unit-cost edge between its two nodes.

mod dedup;
mod range;

pub use dedup::VertexDedup;
pub use range::{Passability, Unrestricted};

use std::collections::{HashSet, VecDeque};

use glam::Vec3;

use crate::error::{PlanetError, Result};
use crate::geometry::Triangle;

/// Identifier of a deduplicated node, in `0..node_count`
pub type NodeId = usize;

/// Undirected adjacency graph over deduplicated mesh vertices
///
/// Node ids are assigned in the order corners are first seen while walking
/// the triangles (`i`, `j`, `k` of each triangle in list order). Adjacency
/// is symmetric, free of self-loops, and every neighbour list is sorted.
#[derive(Debug, Clone)]
pub struct NodeGraph {
    /// Position of each node (indexed by node ID)
    positions: Vec<Vec3>,
    /// Sorted neighbour ids of each node (indexed by node ID)
    neighbors: Vec<Vec<NodeId>>,
    /// Node id triple of each source triangle, in input order and winding
    faces: Vec<[NodeId; 3]>,
    /// Position-to-id lookup
    lookup: VertexDedup,
}

impl NodeGraph {
    /// Build the graph from a triangle list
    ///
    /// Corners closer than `tolerance` are treated as the same node. An
    /// empty triangle list gives an empty graph.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `tolerance` is not a positive finite number
    ///
    /// # Example
    ///
    /// ```rust
    /// use hex_planet::geometry::build_geodesic;
    /// use hex_planet::graph::NodeGraph;
    ///
    /// let graph = NodeGraph::from_triangles(&build_geodesic(1), 1e-5).unwrap();
    /// assert_eq!(graph.node_count(), 42);
    /// ```
    pub fn from_triangles(triangles: &[Triangle], tolerance: f32) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(PlanetError::InvalidConfig(format!(
                "merge tolerance must be positive and finite (got {})",
                tolerance
            )));
        }

        // Step 1: Assign ids to first-seen positions
        let mut lookup = VertexDedup::new(tolerance);
        let mut positions = Vec::new();
        let faces: Vec<[NodeId; 3]> = triangles
            .iter()
            .map(|tri| {
                tri.vertices().map(|corner| {
                    let (id, is_new) = lookup.insert_or_get(corner);
                    if is_new {
                        positions.push(corner);
                    }
                    id
                })
            })
            .collect();

        // Step 2: One (possibly empty) neighbour set per node
        let mut neighbor_sets: Vec<HashSet<NodeId>> = vec![HashSet::new(); lookup.len()];

        // Step 3: Both directions of all three corner pairs
        for &[i, j, k] in &faces {
            for (a, b) in [(i, j), (i, k), (j, k)] {
                if a != b {
                    neighbor_sets[a].insert(b);
                    neighbor_sets[b].insert(a);
                }
            }
        }

        let neighbors = neighbor_sets
            .into_iter()
            .map(|set| {
                let mut list: Vec<NodeId> = set.into_iter().collect();
                list.sort_unstable(); // Deterministic ordering
                list
            })
            .collect();

        Ok(Self {
            positions,
            neighbors,
            faces,
            lookup,
        })
    }

    /// Number of distinct nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// True if the graph has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions of all nodes, indexed by node id
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Node id triple of every source triangle
    #[inline]
    pub fn faces(&self) -> &[[NodeId; 3]] {
        &self.faces
    }

    /// Merge tolerance the graph was built with
    #[inline]
    pub fn merge_tolerance(&self) -> f32 {
        self.lookup.tolerance()
    }

    /// Position of a node
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `node >= node_count()`
    pub fn node_position(&self, node: NodeId) -> Result<Vec3> {
        self.positions
            .get(node)
            .copied()
            .ok_or(PlanetError::NodeNotFound(node))
    }

    /// Node registered at a position (within the merge tolerance)
    ///
    /// # Errors
    ///
    /// Returns `PositionNotFound` if no node lies within tolerance
    pub fn node_at(&self, position: Vec3) -> Result<NodeId> {
        self.lookup
            .get(position)
            .ok_or(PlanetError::PositionNotFound(position))
    }

    /// Neighbour ids of a node, sorted ascending
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `node >= node_count()`
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        self.neighbors
            .get(node)
            .map(Vec::as_slice)
            .ok_or(PlanetError::NodeNotFound(node))
    }

    /// Number of neighbours of a node
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// Node whose position is closest (Euclidean) to `position`
    ///
    /// Scans every node in id order; on an exact tie the lowest id wins.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGraph` if there are no nodes
    pub fn nearest_node(&self, position: Vec3) -> Result<NodeId> {
        let mut nearest: Option<(NodeId, f32)> = None;
        for (id, p) in self.positions.iter().enumerate() {
            let distance = p.distance_squared(position);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((id, distance));
            }
        }
        nearest.map(|(id, _)| id).ok_or(PlanetError::EmptyGraph)
    }

    /// Hop distance from `start` to every node (`None` if unreachable)
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `start` is not a node
    pub fn shortest_hops(&self, start: NodeId) -> Result<Vec<Option<u32>>> {
        if start >= self.node_count() {
            return Err(PlanetError::NodeNotFound(start));
        }

        let mut hops = vec![None; self.node_count()];
        let mut queue = VecDeque::from([start]);
        hops[start] = Some(0);

        while let Some(current) = queue.pop_front() {
            let next = hops[current].unwrap_or_default() + 1;
            for &neighbor in &self.neighbors[current] {
                if hops[neighbor].is_none() {
                    hops[neighbor] = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(hops)
    }

    /// True if every node can reach every other node
    ///
    /// A graph without nodes is not considered connected.
    pub fn is_connected(&self) -> bool {
        match self.shortest_hops(0) {
            Ok(hops) => hops.iter().all(Option::is_some),
            Err(_) => false,
        }
    }
}
