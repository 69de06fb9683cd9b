//! Error types for the Strongbox core.

/// Core error type for Strongbox configuration and shared types.
#[derive(Debug, thiserror::Error)]
pub enum StrongboxError {
    /// Invalid region name.
    #[error("invalid AWS region: {0:?} (must be non-empty and contain no whitespace)")]
    InvalidRegion(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for Strongbox core operations.
pub type StrongboxResult<T> = Result<T, StrongboxError>;
