//! The error returned by a failed fetch.
//!
//! Every failure of the HTTP collaborator, whether it could not connect, the
//! transfer broke off, or the server answered with an error status, is wrapped
//! exactly once into a [`FetchError`]. The original error stays reachable for
//! callers that want to inspect it; S3 error bodies are not interpreted here.

use std::error::Error;

use strongbox_sigv4::SigningRequest;

/// Boxed underlying cause of a [`FetchError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A fetch of a secret object failed in the HTTP layer.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {bucket}/{path}")]
pub struct FetchError {
    bucket: String,
    path: String,
    #[source]
    source: BoxError,
}

impl FetchError {
    /// Wrap a transport error raised while fetching `request`.
    pub fn new(request: &SigningRequest, source: impl Into<BoxError>) -> Self {
        Self {
            bucket: request.bucket().to_owned(),
            path: request.path().to_owned(),
            source: source.into(),
        }
    }

    /// Bucket of the failed request.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object path of the failed request.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The error raised by the HTTP client.
    #[must_use]
    pub fn wrapped_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// The error raised by the HTTP client, if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    /// Consume the error, returning the error raised by the HTTP client.
    #[must_use]
    pub fn into_wrapped_error(self) -> BoxError {
        self.source
    }
}
