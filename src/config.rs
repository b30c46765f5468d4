//! Geodesic Planet Configuration and Builder
//!
//! This module provides configuration types for deterministic planet generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PlanetError, Result};
use crate::geometry::{shortest_edge, triangle_count, vertex_count};

/// Highest accepted subdivision level
///
/// Level 8 already produces 1,310,720 triangles and 655,362 nodes.
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Default distance under which two vertices merge into one node (unit sphere)
pub const DEFAULT_MERGE_TOLERANCE: f32 = 1e-5;

/// Exclusive upper bound for the merge tolerance at a subdivision level
///
/// Half the level's shortest edge, so distinct midpoints can never collapse
/// into one node. `None` above [`MAX_SUBDIVISIONS`].
pub fn max_merge_tolerance(levels: u32) -> Option<f32> {
    if levels > MAX_SUBDIVISIONS {
        return None;
    }
    shortest_edge(levels).map(|edge| edge * 0.5)
}

/// Configuration for deterministic geodesic planet generation
///
/// The same configuration always produces the identical planet: same node
/// ids at the same positions, same adjacency.
///
/// # Serialization
///
/// Only the configuration is serialized, never the generated graph.
/// The planet is regenerated from the configuration when needed.
///
/// # Example
///
/// ```rust
/// use hex_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .subdivisions(2)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: PlanetConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    /// Number of times each icosahedron face is split into four
    ///
    /// - 0: bare icosahedron, 12 nodes
    /// - 1: 42 nodes
    /// - 3: 642 nodes (default)
    /// - 5: 10,242 nodes
    pub subdivisions: u32,

    /// Sphere radius in world units
    ///
    /// The graph is built on the unit sphere; the radius only scales the
    /// positions handed out to callers and the query positions handed in.
    pub radius: f32,

    /// Distance under which two vertices are the same node, on the unit sphere
    pub merge_tolerance: f32,
}

impl PlanetConfig {
    /// Number of triangles the mesh builder emits for this configuration
    ///
    /// `None` only for levels too deep to count in a `usize`.
    #[inline]
    pub fn triangle_count(&self) -> Option<usize> {
        triangle_count(self.subdivisions)
    }

    /// Number of distinct nodes a correctly merged graph has
    ///
    /// `None` only for levels too deep to count in a `usize`.
    #[inline]
    pub fn expected_node_count(&self) -> Option<usize> {
        vertex_count(self.subdivisions)
    }

    /// Check every field, including their interplay
    ///
    /// The fields are public and the struct deserializes directly, so this is
    /// run by both [`PlanetConfigBuilder::build`] and
    /// [`HexPlanet::generate`](crate::planet::HexPlanet::generate).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - subdivisions > [`MAX_SUBDIVISIONS`]
    /// - radius is not a positive finite number
    /// - merge tolerance is not in `(0, max_merge_tolerance(subdivisions))`
    pub fn validate(&self) -> Result<()> {
        let Some(max_tolerance) = max_merge_tolerance(self.subdivisions) else {
            return Err(PlanetError::InvalidConfig(format!(
                "subdivisions must be <= {} (got {})",
                MAX_SUBDIVISIONS, self.subdivisions
            )));
        };

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlanetError::InvalidConfig(format!(
                "radius must be positive and finite (got {})",
                self.radius
            )));
        }

        let tolerance = self.merge_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= max_tolerance {
            return Err(PlanetError::InvalidConfig(format!(
                "merge tolerance must be in (0, {}) at {} subdivisions (got {})",
                max_tolerance, self.subdivisions, tolerance
            )));
        }

        Ok(())
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            subdivisions: 3,
            radius: 1.0,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
        }
    }
}

/// Builder for creating PlanetConfig with validation
///
/// # Example
///
/// ```rust
/// use hex_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .subdivisions(4)
///     .unwrap()
///     .radius(25.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.subdivisions, 4);
/// ```
#[derive(Debug, Clone)]
pub struct PlanetConfigBuilder {
    subdivisions: u32,
    radius: f32,
    merge_tolerance: f32,
}

impl PlanetConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - subdivisions: 3
    /// - radius: 1.0
    /// - merge_tolerance: [`DEFAULT_MERGE_TOLERANCE`]
    pub fn new() -> Self {
        let defaults = PlanetConfig::default();
        Self {
            subdivisions: defaults.subdivisions,
            radius: defaults.radius,
            merge_tolerance: defaults.merge_tolerance,
        }
    }

    /// Set the number of subdivision levels
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if levels > [`MAX_SUBDIVISIONS`]
    pub fn subdivisions(mut self, levels: u32) -> Result<Self> {
        if levels > MAX_SUBDIVISIONS {
            return Err(PlanetError::InvalidConfig(format!(
                "subdivisions must be <= {} (got {})",
                MAX_SUBDIVISIONS, levels
            )));
        }
        self.subdivisions = levels;
        Ok(self)
    }

    /// Set the sphere radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius is not a positive finite number
    pub fn radius(mut self, radius: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PlanetError::InvalidConfig(format!(
                "radius must be positive and finite (got {})",
                radius
            )));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Set the vertex merge tolerance (unit-sphere distance)
    ///
    /// The upper bound depends on the subdivision level and is checked by
    /// [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the tolerance is not a positive finite number
    pub fn merge_tolerance(mut self, tolerance: f32) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(PlanetError::InvalidConfig(format!(
                "merge tolerance must be positive and finite (got {})",
                tolerance
            )));
        }
        self.merge_tolerance = tolerance;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the merge tolerance is too large for the
    /// subdivision level (see [`PlanetConfig::validate`])
    pub fn build(self) -> Result<PlanetConfig> {
        let config = PlanetConfig {
            subdivisions: self.subdivisions,
            radius: self.radius,
            merge_tolerance: self.merge_tolerance,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for PlanetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
