//! Movement range: nodes reachable within a hop budget

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use super::{NodeGraph, NodeId};
use crate::error::{PlanetError, Result};

/// Decides whether a unit may step along an edge
///
/// Supplied by the terrain or occupancy layer. A refused edge is simply not
/// expanded; the target node may still be reached through another edge.
pub trait Passability {
    /// True if moving from `from` into its neighbour `to` is allowed
    fn can_enter(&self, from: NodeId, to: NodeId) -> bool;
}

/// Every edge is passable
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl Passability for Unrestricted {
    #[inline]
    fn can_enter(&self, _from: NodeId, _to: NodeId) -> bool {
        true
    }
}

impl<F> Passability for F
where
    F: Fn(NodeId, NodeId) -> bool,
{
    #[inline]
    fn can_enter(&self, from: NodeId, to: NodeId) -> bool {
        self(from, to)
    }
}

impl NodeGraph {
    /// Nodes reachable from `start` in at most `budget` hops
    ///
    /// The start node is never part of the result; it is already occupied.
    /// A budget of 0 gives an empty set.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `start` is not a node
    ///
    /// # Example
    ///
    /// ```rust
    /// use hex_planet::geometry::build_geodesic;
    /// use hex_planet::graph::NodeGraph;
    ///
    /// let graph = NodeGraph::from_triangles(&build_geodesic(0), 1e-5).unwrap();
    /// let reachable = graph.movement_range(0, 1).unwrap();
    /// assert_eq!(reachable.len(), 5);
    /// ```
    pub fn movement_range(&self, start: NodeId, budget: u32) -> Result<HashSet<NodeId>> {
        self.movement_range_with(start, budget, &Unrestricted)
    }

    /// Nodes reachable from `start` in at most `budget` hops over passable edges
    ///
    /// Breadth-first: a node's hop count is fixed the first time it is
    /// reached, which is its shortest distance since every edge costs one.
    pub fn movement_range_with<P>(
        &self,
        start: NodeId,
        budget: u32,
        passability: &P,
    ) -> Result<HashSet<NodeId>>
    where
        P: Passability + ?Sized,
    {
        if start >= self.node_count() {
            return Err(PlanetError::NodeNotFound(start));
        }

        let mut reachable = HashSet::new();
        let mut hops: HashMap<NodeId, u32> = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let distance = hops[&current];
            if distance > 0 {
                reachable.insert(current);
            }
            if distance == budget {
                continue;
            }

            for &neighbor in &self.neighbors[current] {
                if hops.contains_key(&neighbor) || !passability.can_enter(current, neighbor) {
                    continue;
                }
                hops.insert(neighbor, distance + 1);
                queue.push_back(neighbor);
            }
        }

        trace!(start, budget, reachable = reachable.len(), "computed movement range");
        Ok(reachable)
    }
}
