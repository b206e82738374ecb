//! Error types for the routing crate.

/// Errors produced while building a continuum.
///
/// Lookups on a built continuum never fail.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// The routing group is empty or its total weight is not positive.
    #[error("the total weight of the routing group must be positive")]
    InvalidGroup,

    /// The requested hash algorithm is not available.
    #[error("hash algorithm not available: {0}")]
    HashUnavailable(String),
}
