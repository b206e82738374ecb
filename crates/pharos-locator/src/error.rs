//! Error types for the locator crate.

use pharos_routing::RoutingError;

/// Errors produced by the routing table and its configuration loader.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    /// No routing group with the requested name.
    #[error("routing group not found: {0}")]
    GroupNotFound(String),

    /// A group definition could not be turned into a continuum.
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    /// The groups file could not be read.
    #[error("failed to read groups file: {0}")]
    Io(#[from] std::io::Error),

    /// The groups file could not be parsed.
    #[error("failed to parse groups file: {0}")]
    Parse(#[from] toml::de::Error),
}
