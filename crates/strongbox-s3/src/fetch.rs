//! Signed retrieval of a single object.

use strongbox_sigv4::{SigningRequest, sign};
use tracing::{debug, warn};

use crate::client::{Connector, HttpClient};
use crate::error::FetchError;

/// Response type produced by a connector's clients.
pub type ResponseOf<C> = <<C as Connector>::Client as HttpClient>::Response;

/// Sign a GET for the requested object and issue it through `connector`.
///
/// A client scoped to `https://{hostname}` is created for this call only, and
/// the object is requested as `{bucket}/{path}` with the signed headers. The
/// client's response is returned unchanged. Any error from the client is
/// wrapped into a [`FetchError`]; nothing is retried.
pub fn sign_and_get<C: Connector>(
    connector: &C,
    request: &SigningRequest,
) -> Result<ResponseOf<C>, FetchError> {
    let signed = sign(request);

    debug!(
        base_url = %signed.base_url,
        target = %signed.target,
        "Fetching object"
    );

    let client = connector.connect(&signed.base_url).map_err(|e| {
        warn!(base_url = %signed.base_url, error = %e, "Failed to create HTTP client");
        FetchError::new(request, e)
    })?;

    client.get(&signed.target, &signed.headers).map_err(|e| {
        warn!(
            base_url = %signed.base_url,
            target = %signed.target,
            error = %e,
            "Failed to fetch object"
        );
        FetchError::new(request, e)
    })
}
