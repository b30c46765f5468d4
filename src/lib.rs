//! Geodesic planet generation
//!
//! A standalone library for building icosphere planets and the node graph
//! that units move across, suitable for use with any game engine (Bevy,
//! Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use hex_planet::*;
//!
//! // Generate a planet
//! let config = PlanetConfigBuilder::new()
//!     .subdivisions(3).unwrap()
//!     .radius(20.0).unwrap()
//!     .build().unwrap();
//!
//! let planet = HexPlanet::generate(config).unwrap();
//!
//! // Where can a unit on node 0 move with 2 hops?
//! let range = planet.movement_range(0, 2).unwrap();
//! println!("{} reachable nodes", range.len());
//!
//! // Generate mesh for rendering
//! let mesh = generate_mesh(&planet);
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-node lookups using KD-tree
//! - `serde`: Enables serialization support for configuration

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod graph;
pub mod planet;
pub mod mesh;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{PlanetError, Result};
pub use config::{
    max_merge_tolerance, PlanetConfig, PlanetConfigBuilder, DEFAULT_MERGE_TOLERANCE,
    MAX_SUBDIVISIONS,
};
pub use geometry::{build_geodesic, Triangle};
pub use graph::{NodeGraph, NodeId, Passability, Unrestricted};
pub use planet::HexPlanet;
pub use mesh::{MeshData, generate_mesh, generate_indexed_mesh, mesh_from_triangles};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec3 for convenience
pub use glam::Vec3;
