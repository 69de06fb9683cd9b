//! Signed fetch integration tests.

#[cfg(test)]
mod tests {
    use std::io::Read;

    use chrono::Utc;
    use strongbox_s3::{FetchError, sign_and_get};
    use strongbox_sigv4::{Credentials, SigningRequest};

    use crate::{
        TEST_ACCESS_KEY, TEST_SECRET_KEY, cleanup_bucket, create_bucket_with_object, s3_client,
        strongbox_connector, test_bucket_name,
    };

    /// Fetch `bucket/key` with Strongbox on a blocking thread.
    async fn fetch(
        bucket: String,
        key: &'static str,
        credentials: Credentials,
    ) -> Result<String, FetchError> {
        tokio::task::spawn_blocking(move || -> Result<String, FetchError> {
            let request = SigningRequest::new(bucket, key, credentials, Utc::now())
                .expect("valid request parameters");
            let mut response = sign_and_get(&strongbox_connector(), &request)?;
            let mut body = String::new();
            response
                .read_to_string(&mut body)
                .expect("readable response body");
            Ok(body)
        })
        .await
        .expect("fetch task panicked")
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fetch_secret_object() {
        let client = s3_client();
        let bucket =
            create_bucket_with_object(&client, "fetch", "db-password", b"hunter2").await;

        let body = fetch(
            bucket.clone(),
            "db-password",
            Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY),
        )
        .await
        .expect("fetch should succeed");
        assert_eq!(body, "hunter2");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fetch_nested_key_with_session_token() {
        let client = s3_client();
        let bucket =
            create_bucket_with_object(&client, "nested", "certs/server.pem", b"-----BEGIN-----")
                .await;

        let body = fetch(
            bucket.clone(),
            "/certs/server.pem",
            Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY).with_session_token("test-token"),
        )
        .await
        .expect("fetch should succeed");
        assert_eq!(body, "-----BEGIN-----");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_wrap_not_found_as_fetch_error() {
        let client = s3_client();
        let bucket = create_bucket_with_object(&client, "missing", "present", b"x").await;

        let err = fetch(
            bucket.clone(),
            "absent",
            Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY),
        )
        .await
        .expect_err("fetch of a missing key should fail");

        assert_eq!(err.bucket(), bucket);
        assert_eq!(err.path(), "absent");
        let cause = err
            .downcast_ref::<reqwest::Error>()
            .expect("cause should be the HTTP client error");
        assert_eq!(cause.status(), Some(reqwest::StatusCode::NOT_FOUND));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_wrap_missing_bucket_as_fetch_error() {
        let bucket = test_bucket_name("ghost");

        let err = fetch(
            bucket,
            "anything",
            Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY),
        )
        .await
        .expect_err("fetch from a missing bucket should fail");

        let cause = err
            .downcast_ref::<reqwest::Error>()
            .expect("cause should be the HTTP client error");
        assert!(cause.status().is_some_and(|s| s.is_client_error()));
    }
}
