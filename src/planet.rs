//! HexPlanet main structure

use std::collections::HashSet;

use glam::Vec3;
use tracing::{info, warn};

use crate::config::PlanetConfig;
use crate::error::{PlanetError, Result};
use crate::geometry::build_geodesic;
use crate::graph::{NodeGraph, NodeId, Passability};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A geodesic planet: node positions plus the adjacency graph between them
///
/// The graph lives on the unit sphere; positions handed to and from callers
/// are in world units (scaled by the configured radius). A planet is built
/// once and then only read, so any number of callers may query it at the
/// same time. Rebuilding means generating a new `HexPlanet`.
///
/// # Examples
///
/// ```
/// use hex_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .subdivisions(2)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let planet = HexPlanet::generate(config).unwrap();
/// println!("Generated {} nodes", planet.node_count());
///
/// let range = planet.movement_range(0, 2).unwrap();
/// assert!(!range.contains(&0));
/// ```
#[derive(Clone)]
pub struct HexPlanet {
    /// Configuration used to generate this planet
    config: PlanetConfig,

    /// Deduplicated nodes and their adjacency (unit sphere)
    graph: NodeGraph,

    /// Spatial index for fast position-to-node lookups (optional, requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl HexPlanet {
    /// Generate a planet from its configuration
    ///
    /// Builds the geodesic triangle list, extracts the node graph from it and
    /// drops the triangles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails
    /// [`PlanetConfig::validate`] (it may have bypassed the builder), or if
    /// vertex merging did not produce the closed-form node count
    pub fn generate(config: PlanetConfig) -> Result<Self> {
        config.validate()?;

        let triangles = build_geodesic(config.subdivisions);
        let graph = NodeGraph::from_triangles(&triangles, config.merge_tolerance)?;

        let expected = config.expected_node_count();
        if expected != Some(graph.node_count()) {
            warn!(
                nodes = graph.node_count(),
                ?expected,
                merge_tolerance = config.merge_tolerance,
                "node count differs from closed form"
            );
            return Err(PlanetError::InvalidConfig(format!(
                "merge tolerance {} produced {} nodes at {} subdivisions (expected {:?})",
                config.merge_tolerance,
                graph.node_count(),
                config.subdivisions,
                expected
            )));
        }

        info!(
            subdivisions = config.subdivisions,
            triangles = triangles.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "generated planet"
        );

        // Build spatial index (requires spatial-index feature)
        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(graph.positions());

        Ok(Self {
            config,
            graph,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used to generate this planet
    #[inline]
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Get the sphere radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    /// Get the underlying unit-sphere graph
    #[inline]
    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    /// Get the number of nodes on this planet
    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges between nodes
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node id triple of every mesh triangle
    #[inline]
    pub fn faces(&self) -> &[[NodeId; 3]] {
        self.graph.faces()
    }

    /// World position of a node
    ///
    /// Used for placing units and buildings.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the id is out of range
    pub fn node_position(&self, node: NodeId) -> Result<Vec3> {
        Ok(self.graph.node_position(node)? * self.radius())
    }

    /// Node registered at a world position
    ///
    /// # Errors
    ///
    /// Returns `PositionNotFound` if no node sits at that position
    pub fn node_at(&self, position: Vec3) -> Result<NodeId> {
        self.graph.node_at(position / self.radius())
    }

    /// Neighbour ids of a node, sorted ascending
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the id is out of range
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        self.graph.neighbors(node)
    }

    /// Node closest to a world position, by full scan
    ///
    /// On exact ties the lowest node id wins.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGraph` if the planet has no nodes
    pub fn nearest_node(&self, position: Vec3) -> Result<NodeId> {
        self.graph.nearest_node(position / self.radius())
    }

    /// Node closest to a world position, via the KD-tree (requires spatial-index feature)
    ///
    /// Essential for converting 3D positions (from raycasting, clicks, etc.)
    /// into node ids on dense planets.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGraph` if the planet has no nodes
    #[cfg(feature = "spatial-index")]
    pub fn find_node_at(&self, position: Vec3) -> Result<NodeId> {
        self.spatial_index
            .find_nearest(position / self.radius())
            .ok_or(PlanetError::EmptyGraph)
    }

    /// Nodes a unit standing on `start` can move to with `budget` hops
    ///
    /// Excludes `start` itself.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `start` is out of range
    pub fn movement_range(&self, start: NodeId, budget: u32) -> Result<HashSet<NodeId>> {
        self.graph.movement_range(start, budget)
    }

    /// Like [`movement_range`](Self::movement_range), skipping edges `passability` refuses
    pub fn movement_range_with<P>(
        &self,
        start: NodeId,
        budget: u32,
        passability: &P,
    ) -> Result<HashSet<NodeId>>
    where
        P: Passability + ?Sized,
    {
        self.graph.movement_range_with(start, budget, passability)
    }
}
