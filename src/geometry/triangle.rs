//! Triangle on (or destined for) the unit sphere

use glam::{Vec2, Vec3};

/// Texture coordinate stamped on every triangle's `i` corner
pub const UV_I: Vec2 = Vec2::new(0.5, -0.94999);
/// Texture coordinate stamped on every triangle's `j` corner
pub const UV_J: Vec2 = Vec2::new(0.8897, -0.275);
/// Texture coordinate stamped on every triangle's `k` corner
pub const UV_K: Vec2 = Vec2::new(0.1103, -0.275);

/// A triangle with three corners and a texture coordinate per corner
///
/// Corner order defines the winding. Every triangle produced by this crate
/// is wound counter-clockwise when seen from outside the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner
    pub i: Vec3,
    /// Second corner
    pub j: Vec3,
    /// Third corner
    pub k: Vec3,
    /// Texture coordinate of `i`
    pub i_uv: Vec2,
    /// Texture coordinate of `j`
    pub j_uv: Vec2,
    /// Texture coordinate of `k`
    pub k_uv: Vec2,
}

impl Triangle {
    /// Create a triangle with the fixed texture coordinates
    pub fn new(i: Vec3, j: Vec3, k: Vec3) -> Self {
        Self {
            i,
            j,
            k,
            i_uv: UV_I,
            j_uv: UV_J,
            k_uv: UV_K,
        }
    }

    /// Corners in winding order
    #[inline]
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.i, self.j, self.k]
    }

    /// Texture coordinates in winding order
    #[inline]
    pub fn uvs(&self) -> [Vec2; 3] {
        [self.i_uv, self.j_uv, self.k_uv]
    }

    /// Unnormalized outward face normal (right-hand rule over the winding)
    #[inline]
    pub fn face_normal(&self) -> Vec3 {
        (self.j - self.i).cross(self.k - self.i)
    }

    /// Split into four triangles, pushing the edge midpoints onto the unit sphere
    ///
    /// With `a`, `b`, `c` the normalized midpoints of `ij`, `jk` and `ik`,
    /// the children are `(i, a, c)`, `(j, b, a)`, `(k, c, b)` and `(a, b, c)`.
    /// Each child keeps the parent's winding.
    pub fn subdivide(&self) -> [Triangle; 4] {
        let a = (self.i * 0.5 + self.j * 0.5).normalize();
        let b = (self.j * 0.5 + self.k * 0.5).normalize();
        let c = (self.i * 0.5 + self.k * 0.5).normalize();

        [
            Triangle::new(self.i, a, c),
            Triangle::new(self.j, b, a),
            Triangle::new(self.k, c, b),
            Triangle::new(a, b, c),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octant() -> Triangle {
        Triangle::new(Vec3::X, Vec3::Y, Vec3::Z)
    }

    #[test]
    fn test_new_uses_fixed_uvs() {
        let tri = octant();
        assert_eq!(tri.uvs(), [UV_I, UV_J, UV_K]);
    }

    #[test]
    fn test_subdivide_corners() {
        let tri = octant();
        let [t0, t1, t2, t3] = tri.subdivide();

        let a = Vec3::new(1.0, 1.0, 0.0).normalize();
        let b = Vec3::new(0.0, 1.0, 1.0).normalize();
        let c = Vec3::new(1.0, 0.0, 1.0).normalize();

        assert_eq!(t0.i, tri.i);
        assert_eq!(t1.i, tri.j);
        assert_eq!(t2.i, tri.k);
        assert!(t0.j.abs_diff_eq(a, 1e-6));
        assert!(t0.k.abs_diff_eq(c, 1e-6));
        assert!(t1.j.abs_diff_eq(b, 1e-6));
        assert!(t3.i.abs_diff_eq(a, 1e-6));
        assert!(t3.j.abs_diff_eq(b, 1e-6));
        assert!(t3.k.abs_diff_eq(c, 1e-6));
        assert!(t2.j.abs_diff_eq(c, 1e-6));
        assert!(t2.k.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn test_subdivide_preserves_winding() {
        let tri = octant();
        let outward = tri.face_normal().dot(tri.i);
        assert!(outward > 0.0);

        for child in tri.subdivide() {
            let centroid = (child.i + child.j + child.k) / 3.0;
            assert!(
                child.face_normal().dot(centroid) > 0.0,
                "child {:?} flipped winding",
                child
            );
        }
    }

    #[test]
    fn test_midpoints_on_unit_sphere() {
        for child in octant().subdivide() {
            for v in child.vertices() {
                assert!((v.length() - 1.0).abs() < 1e-6);
            }
        }
    }
}
