//! Error types for geodesic planet generation and graph queries

use glam::Vec3;

use crate::graph::NodeId;

/// Errors that can occur during planet generation or queries
///
/// Every variant is a violated precondition on the caller's side. Nothing in
/// this crate is retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanetError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Requested node ID does not exist
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    /// Position is not a registered node position
    #[error("no node registered at position {0}")]
    PositionNotFound(Vec3),
    /// Query needs at least one node but the graph has none
    #[error("graph has no nodes")]
    EmptyGraph,
}

/// Result type alias for planet operations
pub type Result<T> = std::result::Result<T, PlanetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlanetError::InvalidConfig("bad".into()).to_string(),
            "invalid configuration: bad"
        );
        assert_eq!(PlanetError::NodeNotFound(7).to_string(), "node not found: 7");
        assert_eq!(PlanetError::EmptyGraph.to_string(), "graph has no nodes");
    }
}
