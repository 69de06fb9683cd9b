//! Blocking HTTP collaborator backed by `reqwest`.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use strongbox_sigv4::SignedHeaders;
use strongbox_sigv4::canonical::encode_path;
use tracing::debug;

use crate::client::{Connector, HttpClient};

/// Creates [`ReqwestClient`]s sharing one connection pool.
///
/// Non-2xx responses are reported as errors, so a `403 Forbidden` or
/// `404 Not Found` from S3 surfaces as a failed fetch.
#[derive(Debug, Clone)]
pub struct ReqwestConnector {
    inner: Client,
    endpoint_override: Option<String>,
}

impl ReqwestConnector {
    /// Create a connector with reqwest's default client settings.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            inner: Client::builder().build()?,
            endpoint_override: None,
        })
    }

    /// Create a connector whose clients give up on a request after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            inner: Client::builder().timeout(timeout).build()?,
            endpoint_override: None,
        })
    }

    /// Wrap an already configured `reqwest` client (proxies, TLS roots, ...).
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self {
            inner: client,
            endpoint_override: None,
        }
    }

    /// Send every request to `endpoint` (for example an S3-compatible store at
    /// `http://localhost:9000`) instead of the regional AWS endpoint. The
    /// signed `host` header still names the AWS endpoint.
    #[must_use]
    pub fn endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }
}

impl Connector for ReqwestConnector {
    type Client = ReqwestClient;

    fn connect(&self, base_url: &str) -> Result<ReqwestClient, reqwest::Error> {
        let base_url = self.endpoint_override.as_deref().unwrap_or(base_url);
        Ok(ReqwestClient {
            base_url: base_url.trim_end_matches('/').to_owned(),
            inner: self.inner.clone(),
        })
    }
}

/// A blocking `reqwest` client scoped to one base URL.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    base_url: String,
    inner: Client,
}

impl ReqwestClient {
    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `target` onto the base URL, encoding each segment the same way
    /// the signed canonical URI is encoded.
    fn url_for(&self, target: &str) -> String {
        format!(
            "{}/{}",
            self.base_url,
            encode_path(target.trim_start_matches('/'))
        )
    }
}

impl HttpClient for ReqwestClient {
    type Response = Response;
    type Error = reqwest::Error;

    fn get(&self, target: &str, headers: &SignedHeaders) -> Result<Response, reqwest::Error> {
        let url = self.url_for(target);
        let mut builder = self.inner.get(&url);
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }

        let response = builder.send()?;
        debug!(url = %url, status = %response.status(), "Received response");
        response.error_for_status()
    }
}
