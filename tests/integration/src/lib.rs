//! Integration tests for Strongbox against an S3-compatible endpoint.
//!
//! These tests require a running S3-compatible server (LocalStack, MinIO,
//! ...) at `localhost:4566`. They are marked `#[ignore]` so they
//! don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p strongbox-integration -- --ignored
//! ```

use std::sync::Once;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use strongbox_s3::ReqwestConnector;

static INIT: Once = Once::new();

/// Access key accepted by local test servers.
pub const TEST_ACCESS_KEY: &str = "test";

/// Secret key accepted by local test servers.
pub const TEST_SECRET_KEY: &str = "test";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("S3_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Create an SDK client used to seed and clean up test objects.
#[must_use]
pub fn s3_client() -> aws_sdk_s3::Client {
    init_tracing();

    let creds = Credentials::new(
        TEST_ACCESS_KEY,
        TEST_SECRET_KEY,
        None,
        None,
        "integration-test",
    );

    let config = aws_sdk_s3::config::Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(creds)
        .endpoint_url(endpoint_url())
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(config)
}

/// Create a Strongbox connector pointing at the local server.
///
/// Must be called from a blocking context (e.g. inside `spawn_blocking`).
#[must_use]
pub fn strongbox_connector() -> ReqwestConnector {
    init_tracing();

    ReqwestConnector::new()
        .unwrap_or_else(|e| panic!("failed to build HTTP client: {e}"))
        .endpoint_override(endpoint_url())
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Create a bucket holding one object and return the bucket name.
/// Caller is responsible for cleanup.
pub async fn create_bucket_with_object(
    client: &aws_sdk_s3::Client,
    prefix: &str,
    key: &str,
    body: &'static [u8],
) -> String {
    let name = test_bucket_name(prefix);
    client
        .create_bucket()
        .bucket(&name)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to create bucket {name}: {e}"));
    client
        .put_object()
        .bucket(&name)
        .key(key)
        .body(aws_sdk_s3::primitives::ByteStream::from_static(body))
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to put {name}/{key}: {e}"));
    name
}

/// Delete all objects in a bucket, then delete the bucket.
pub async fn cleanup_bucket(client: &aws_sdk_s3::Client, bucket: &str) {
    let Ok(resp) = client.list_objects_v2().bucket(bucket).send().await else {
        return; // Bucket may not exist.
    };

    for obj in resp.contents() {
        if let Some(key) = obj.key() {
            let _ = client.delete_object().bucket(bucket).key(key).send().await;
        }
    }

    let _ = client.delete_bucket().bucket(bucket).send().await;
}

mod test_fetch;
