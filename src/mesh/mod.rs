//! Mesh generation for HexPlanet
//!
//! Generates engine-agnostic render buffers from the geodesic triangle list.

use crate::geometry::{build_geodesic, Triangle};
use crate::planet::HexPlanet;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (normalized direction from sphere center)
    pub normals: Vec<[f32; 3]>,
    /// Vertex texture coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Flatten a triangle list into render buffers
///
/// Every triangle gets its own three vertices (nothing is shared), so the
/// index buffer is simply `0..3n` and each corner keeps its own UV. Normals
/// are the unit-sphere positions; positions are scaled by `radius`.
pub fn mesh_from_triangles(triangles: &[Triangle], radius: f32) -> MeshData {
    let vertex_total = triangles.len() * 3;
    let mut mesh = MeshData {
        positions: Vec::with_capacity(vertex_total),
        normals: Vec::with_capacity(vertex_total),
        uvs: Vec::with_capacity(vertex_total),
        indices: Vec::with_capacity(vertex_total),
    };

    for tri in triangles {
        for (vertex, uv) in tri.vertices().into_iter().zip(tri.uvs()) {
            mesh.indices.push(mesh.positions.len() as u32);
            mesh.positions.push((vertex * radius).to_array());
            mesh.normals.push(vertex.normalize().to_array());
            mesh.uvs.push(uv.to_array());
        }
    }

    mesh
}

/// Generate the per-triangle mesh for a planet
///
/// The triangle list is not kept by the planet; it is rebuilt from the
/// planet's configuration, which yields the same triangles in the same order.
pub fn generate_mesh(planet: &HexPlanet) -> MeshData {
    let triangles = build_geodesic(planet.config().subdivisions);
    mesh_from_triangles(&triangles, planet.radius())
}

/// Generate a mesh with one shared vertex per graph node
///
/// Vertex `n` is node `n`, so buffers line up with node ids. UVs are left
/// empty: a shared vertex has no single texture coordinate.
pub fn generate_indexed_mesh(planet: &HexPlanet) -> MeshData {
    let graph = planet.graph();
    let radius = planet.radius();

    MeshData {
        positions: graph
            .positions()
            .iter()
            .map(|p| (*p * radius).to_array())
            .collect(),
        normals: graph
            .positions()
            .iter()
            .map(|p| p.normalize().to_array())
            .collect(),
        uvs: Vec::new(),
        indices: graph
            .faces()
            .iter()
            .flat_map(|face| face.map(|id| id as u32))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{UV_I, UV_J, UV_K};
    use crate::PlanetConfigBuilder;

    fn planet(levels: u32, radius: f32) -> HexPlanet {
        let config = PlanetConfigBuilder::new()
            .subdivisions(levels)
            .unwrap()
            .radius(radius)
            .unwrap()
            .build()
            .unwrap();
        HexPlanet::generate(config).unwrap()
    }

    #[test]
    fn test_generate_mesh() {
        let mesh = generate_mesh(&planet(2, 1.0));

        assert!(!mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 320);
        assert_eq!(mesh.vertex_count(), 960);
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.positions.len(), mesh.uvs.len());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_indices_are_sequential() {
        let mesh = mesh_from_triangles(&build_geodesic(1), 1.0);
        for (n, &index) in mesh.indices.iter().enumerate() {
            assert_eq!(index as usize, n);
        }
    }

    #[test]
    fn test_uvs_repeat_per_triangle() {
        let mesh = mesh_from_triangles(&build_geodesic(1), 1.0);
        for corner in mesh.uvs.chunks(3) {
            assert_eq!(corner, [UV_I.to_array(), UV_J.to_array(), UV_K.to_array()]);
        }
    }

    #[test]
    fn test_normals_match_scaled_positions() {
        let radius = 16.7;
        let mesh = generate_mesh(&planet(1, radius));
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            for axis in 0..3 {
                assert!((p[axis] / radius - n[axis]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_mesh_consistency() {
        let planet = planet(2, 1.0);
        let mesh1 = generate_mesh(&planet);
        let mesh2 = generate_mesh(&planet);
        assert_eq!(mesh1.positions, mesh2.positions);
        assert_eq!(mesh1.indices, mesh2.indices);
    }

    #[test]
    fn test_indexed_mesh() {
        let planet = planet(2, 2.0);
        let mesh = generate_indexed_mesh(&planet);

        assert_eq!(mesh.vertex_count(), planet.node_count());
        assert_eq!(mesh.triangle_count(), 320);
        assert!(mesh.uvs.is_empty());
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < planet.node_count()));

        let p = planet.node_position(5).unwrap();
        assert_eq!(mesh.positions[5], p.to_array());
    }

    #[test]
    fn test_empty_triangles() {
        let mesh = mesh_from_triangles(&[], 1.0);
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }
}
