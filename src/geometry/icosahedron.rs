//! Regular icosahedron inscribed in the unit sphere
//!
//! Vertices sit at the cyclic permutations of `(±1, ±φ, 0)`, scaled to unit
//! length. Faces are listed counter-clockwise as seen from outside.

use glam::Vec3;

use super::Triangle;

/// Golden ratio φ = (1 + √5) / 2
const PHI: f32 = 1.618_034;

/// Vertex indices of the 20 faces, wound counter-clockwise from outside
const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The 12 icosahedron vertices on the unit sphere
pub fn icosahedron_vertices() -> [Vec3; 12] {
    [
        Vec3::new(-1.0, PHI, 0.0),
        Vec3::new(1.0, PHI, 0.0),
        Vec3::new(-1.0, -PHI, 0.0),
        Vec3::new(1.0, -PHI, 0.0),
        Vec3::new(0.0, -1.0, PHI),
        Vec3::new(0.0, 1.0, PHI),
        Vec3::new(0.0, -1.0, -PHI),
        Vec3::new(0.0, 1.0, -PHI),
        Vec3::new(PHI, 0.0, -1.0),
        Vec3::new(PHI, 0.0, 1.0),
        Vec3::new(-PHI, 0.0, -1.0),
        Vec3::new(-PHI, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
}

/// The 20 faces of the unit icosahedron, in a fixed order
pub fn icosahedron() -> Vec<Triangle> {
    let vertices = icosahedron_vertices();
    FACES
        .iter()
        .map(|&[i, j, k]| Triangle::new(vertices[i], vertices[j], vertices[k]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_face_count() {
        assert_eq!(icosahedron().len(), 20);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for v in icosahedron_vertices() {
            assert!((v.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_every_vertex_in_five_faces() {
        let mut counts = [0usize; 12];
        for face in FACES {
            for v in face {
                counts[v] += 1;
            }
        }
        assert!(counts.iter().all(|&c| c == 5), "counts: {:?}", counts);
    }

    #[test]
    fn test_faces_wound_outward() {
        for tri in icosahedron() {
            let centroid = (tri.i + tri.j + tri.k) / 3.0;
            assert!(tri.face_normal().dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_edges_equal_length() {
        let tris = icosahedron();
        let edge = (tris[0].j - tris[0].i).length();
        for tri in &tris {
            for (a, b) in [(tri.i, tri.j), (tri.j, tri.k), (tri.k, tri.i)] {
                assert!(((a - b).length() - edge).abs() < 1e-5);
            }
        }
    }
}
