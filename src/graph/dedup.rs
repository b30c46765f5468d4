//! Grid hash that merges nearly coincident vertices into one node id
//!
//! Space is cut into cubes twice as wide as the merge tolerance. Any point
//! within tolerance of a stored point therefore lives in the same cube or in
//! one of its 26 neighbours, so a lookup visits at most 27 buckets.

use std::collections::HashMap;

use glam::Vec3;

use super::NodeId;

type CellKey = (i64, i64, i64);

/// Assigns sequential node ids to distinct positions
///
/// Two positions closer than the tolerance resolve to the same id. The first
/// position seen for an id is the one that stays registered.
#[derive(Debug, Clone)]
pub struct VertexDedup {
    cells: HashMap<CellKey, Vec<(Vec3, NodeId)>>,
    cell_size: f32,
    tolerance: f32,
    len: usize,
}

impl VertexDedup {
    /// Create an empty index merging points closer than `tolerance`
    pub fn new(tolerance: f32) -> Self {
        Self {
            cells: HashMap::new(),
            cell_size: tolerance * 2.0,
            tolerance,
            len: 0,
        }
    }

    /// Merge distance this index was built with
    #[inline]
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Number of distinct ids handed out
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn cell_key(&self, p: Vec3) -> CellKey {
        let discretize = |v: f32| (v / self.cell_size).floor() as i64;
        (discretize(p.x), discretize(p.y), discretize(p.z))
    }

    /// Id of the closest registered position within tolerance, if any
    pub fn get(&self, point: Vec3) -> Option<NodeId> {
        let (cx, cy, cz) = self.cell_key(point);
        let mut best: Option<(f32, NodeId)> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &(p, id) in bucket {
                        let d = p.distance(point);
                        if d < self.tolerance && best.map_or(true, |(bd, _)| d < bd) {
                            best = Some((d, id));
                        }
                    }
                }
            }
        }

        best.map(|(_, id)| id)
    }

    /// Return the id for `point`, registering it under the next id if new
    ///
    /// The flag is true when a new id was assigned.
    pub fn insert_or_get(&mut self, point: Vec3) -> (NodeId, bool) {
        if let Some(id) = self.get(point) {
            return (id, false);
        }

        let id = self.len;
        self.cells
            .entry(self.cell_key(point))
            .or_default()
            .push((point, id));
        self.len += 1;
        (id, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut dedup = VertexDedup::new(1e-6);

        assert_eq!(dedup.insert_or_get(Vec3::X), (0, true));
        assert_eq!(dedup.insert_or_get(Vec3::Y), (1, true));
        assert_eq!(dedup.insert_or_get(Vec3::X), (0, false));
        assert_eq!(dedup.insert_or_get(Vec3::Z), (2, true));
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn test_merges_within_tolerance() {
        let mut dedup = VertexDedup::new(1e-5);

        let p1 = Vec3::new(0.6, 0.8, 0.0);
        let p2 = Vec3::new(0.6 + 1e-6, 0.8, 0.0);
        let p3 = Vec3::new(0.6 + 1e-3, 0.8, 0.0);

        assert_eq!(dedup.insert_or_get(p1), (0, true));
        assert_eq!(dedup.insert_or_get(p2), (0, false));
        assert_eq!(dedup.insert_or_get(p3), (1, true));
    }

    #[test]
    fn test_cell_boundary() {
        let mut dedup = VertexDedup::new(0.1);

        // Opposite sides of a cube face but within tolerance
        let p1 = Vec3::new(0.199, 0.0, 0.0);
        let p2 = Vec3::new(0.201, 0.0, 0.0);

        assert!(dedup.insert_or_get(p1).1);
        assert!(!dedup.insert_or_get(p2).1);
    }

    #[test]
    fn test_get_miss() {
        let mut dedup = VertexDedup::new(1e-5);
        assert_eq!(dedup.len(), 0);
        assert_eq!(dedup.get(Vec3::X), None);

        dedup.insert_or_get(Vec3::X);
        assert_eq!(dedup.get(Vec3::X), Some(0));
        assert_eq!(dedup.get(Vec3::NEG_X), None);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut dedup = VertexDedup::new(1e-5);
        let p = Vec3::new(-0.5, -1e-7, 0.3);
        dedup.insert_or_get(p);
        assert_eq!(dedup.get(Vec3::new(-0.5, 1e-7, 0.3)), Some(0));
    }
}
