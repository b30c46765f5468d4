//! Spatial indexing for fast position-to-node lookups
//!
//! This module is only available with the `spatial-index` feature.

use glam::Vec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

use crate::graph::NodeId;

/// Wrapper around KD-tree for nearest-node queries
///
/// Answers the same question as [`NodeGraph::nearest_node`](crate::graph::NodeGraph::nearest_node)
/// in O(log n) instead of a full scan. When several nodes are exactly
/// equidistant the tree may pick a different one than the scan does.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
/// - Memory: ~24 bytes per node
#[derive(Clone)]
pub struct SpatialIndex {
    tree: Option<ImmutableKdTree<f32, usize, 3, 32>>,
}

impl SpatialIndex {
    /// Build spatial index from node positions
    ///
    /// The position at index `n` is reported as node `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_planet::*;
    ///
    /// let positions = vec![
    ///     Vec3::new(1.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 1.0, 0.0),
    ///     Vec3::new(0.0, 0.0, 1.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&positions);
    /// assert_eq!(index.find_nearest(Vec3::new(1.0, 0.1, 0.0)), Some(0));
    /// ```
    pub fn new(positions: &[Vec3]) -> Self {
        if positions.is_empty() {
            return Self { tree: None };
        }

        let points: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();

        Self {
            tree: Some(ImmutableKdTree::new_from_slice(&points)),
        }
    }

    /// Find the node nearest to a position
    ///
    /// Returns `None` only when the index was built from no positions.
    pub fn find_nearest(&self, position: Vec3) -> Option<NodeId> {
        let tree = self.tree.as_ref()?;
        let result = tree.nearest_one::<SquaredEuclidean>(&position.to_array());
        Some(result.item as NodeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let positions = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ];

        let index = SpatialIndex::new(&positions);

        assert_eq!(index.find_nearest(Vec3::new(0.9, 0.1, 0.0)), Some(0));
        assert_eq!(index.find_nearest(Vec3::new(0.0, 0.95, 0.0)), Some(1));
        assert_eq!(index.find_nearest(Vec3::new(0.0, 0.1, 0.9)), Some(2));
        assert_eq!(index.find_nearest(Vec3::new(-0.8, 0.0, 0.0)), Some(3));
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let positions = vec![Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0)];

        let index = SpatialIndex::new(&positions);

        assert_eq!(index.find_nearest(positions[0]), Some(0));
        assert_eq!(index.find_nearest(positions[1]), Some(1));
    }

    #[test]
    fn test_spatial_index_empty() {
        let index = SpatialIndex::new(&[]);
        assert_eq!(index.find_nearest(Vec3::X), None);
    }

    #[test]
    fn test_agrees_with_linear_scan() {
        use crate::geometry::build_geodesic;
        use crate::graph::NodeGraph;

        let graph = NodeGraph::from_triangles(&build_geodesic(3), 1e-5).unwrap();
        let index = SpatialIndex::new(graph.positions());

        // Points nudged off nodes so no query sits on an exact tie
        for node in (0..graph.node_count()).step_by(7) {
            let p = graph.node_position(node).unwrap() * 1.01 + Vec3::splat(1e-4);
            assert_eq!(index.find_nearest(p), Some(graph.nearest_node(p).unwrap()));
        }
    }
}
