//! Geodesic sphere construction
//!
//! Builds the triangle soup of a geodesic sphere: a unit icosahedron whose
//! faces are split into four, level by level, with every new vertex pushed
//! back onto the unit sphere.

mod icosahedron;
mod triangle;

pub use icosahedron::{icosahedron, icosahedron_vertices};
pub use triangle::{Triangle, UV_I, UV_J, UV_K};

use tracing::debug;

/// Shortest edge length on the unit sphere at each subdivision level
///
/// Index `n` is level `n`. Values are rounded down.
const SHORTEST_EDGE: [f32; 9] = [
    1.051_462, 0.546_533, 0.275_904, 0.138_283, 0.069_182, 0.034_596, 0.017_298, 0.008_649,
    0.004_324,
];

/// Number of triangles after `levels` subdivisions: `20 × 4^levels`
///
/// Returns `None` if the count does not fit in a `usize`.
#[inline]
pub fn triangle_count(levels: u32) -> Option<usize> {
    4usize.checked_pow(levels)?.checked_mul(20)
}

/// Number of distinct vertices after `levels` subdivisions: `10 × 4^levels + 2`
///
/// Returns `None` if the count does not fit in a `usize`.
#[inline]
pub fn vertex_count(levels: u32) -> Option<usize> {
    4usize.checked_pow(levels)?.checked_mul(10)?.checked_add(2)
}

/// Number of distinct edges after `levels` subdivisions: `30 × 4^levels`
///
/// Returns `None` if the count does not fit in a `usize`.
#[inline]
pub fn edge_count(levels: u32) -> Option<usize> {
    4usize.checked_pow(levels)?.checked_mul(30)
}

/// Length of the shortest edge on the unit sphere after `levels` subdivisions
///
/// Tabulated up to level 8; `None` above that.
#[inline]
pub fn shortest_edge(levels: u32) -> Option<f32> {
    SHORTEST_EDGE.get(levels as usize).copied()
}

/// Run one subdivision pass over a triangle list
///
/// Output order is deterministic: the four children of input triangle `n`
/// occupy positions `4n..4n + 4`.
pub fn subdivide(triangles: &[Triangle]) -> Vec<Triangle> {
    let mut out = Vec::with_capacity(triangles.len() * 4);
    for tri in triangles {
        out.extend(tri.subdivide());
    }
    out
}

/// Build a geodesic sphere by subdividing the unit icosahedron `levels` times
///
/// Every vertex of the result lies on the unit sphere. The call is pure and
/// deterministic.
///
/// # Example
///
/// ```rust
/// use hex_planet::geometry::build_geodesic;
///
/// let triangles = build_geodesic(2);
/// assert_eq!(triangles.len(), 320);
/// ```
pub fn build_geodesic(levels: u32) -> Vec<Triangle> {
    let mut triangles = icosahedron();
    for level in 1..=levels {
        triangles = subdivide(&triangles);
        debug!(pass = level, triangles = triangles.len(), "subdivided geodesic sphere");
    }
    triangles
}
