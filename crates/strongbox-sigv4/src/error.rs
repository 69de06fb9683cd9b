//! Error types for SigV4 signing.
//!
//! Signing itself cannot fail once a [`SigningRequest`](crate::SigningRequest)
//! exists; these errors cover building that request from raw parameters and
//! converting the signed headers into other representations.

/// Errors that can occur while preparing or exporting a signed request.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The bucket name is empty.
    #[error("bucket must not be empty")]
    EmptyBucket,

    /// The object path is empty (or consists only of a leading slash).
    #[error("object path must not be empty")]
    EmptyPath,

    /// The access key ID is empty.
    #[error("access key ID must not be empty")]
    EmptyAccessKeyId,

    /// The secret access key is empty.
    #[error("secret access key must not be empty")]
    EmptySecretAccessKey,

    /// A signed header value cannot be represented as an HTTP header value.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(String),
}
