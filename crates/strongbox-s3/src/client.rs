//! The HTTP collaborator seam.
//!
//! The fetch layer never talks to the network itself. It asks a [`Connector`]
//! for an [`HttpClient`] scoped to the endpoint's base URL, then issues a
//! single GET through it. Implementations decide what a response is and which
//! failures count as errors; the bundled [`ReqwestConnector`](crate::ReqwestConnector)
//! treats any non-2xx status as an error.

use std::error::Error;

use strongbox_sigv4::SignedHeaders;

/// An HTTP client scoped to one base URL.
pub trait HttpClient {
    /// Response handed back to the caller unchanged.
    type Response;

    /// Transport-level error.
    type Error: Error + Send + Sync + 'static;

    /// Issue a GET for `target` (relative to the base URL) with exactly the
    /// given headers and no body.
    fn get(&self, target: &str, headers: &SignedHeaders) -> Result<Self::Response, Self::Error>;
}

/// Creates [`HttpClient`]s for a base URL such as `https://s3.amazonaws.com`.
pub trait Connector {
    /// The client type produced.
    type Client: HttpClient;

    /// Create a client scoped to `base_url`.
    fn connect(
        &self,
        base_url: &str,
    ) -> Result<Self::Client, <Self::Client as HttpClient>::Error>;
}
