//! Canonical request construction for AWS Signature Version 4.
//!
//! The canonical request has the following shape:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! Requests signed here never carry a query string, so that line is always
//! empty. Every header handed to [`build_canonical_request`] is signed.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters that must be percent-encoded in URI path segments.
///
/// Everything except the unreserved characters (A-Z, a-z, 0-9, `-`, `_`,
/// `.`, `~`) is encoded. Forward slashes separate segments and are kept.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the full canonical request string for a request without a query string.
///
/// # Examples
///
/// ```
/// use strongbox_sigv4::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "GET",
///     "/mybucket/mysecret",
///     &[("host", "s3.amazonaws.com")],
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// assert!(canonical.starts_with("GET\n/mybucket/mysecret\n\nhost:s3.amazonaws.com\n\nhost\n"));
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    payload_hash: &str,
) -> String {
    let canonical_uri = build_canonical_uri(uri);
    let canonical_headers = build_canonical_headers(headers);
    let names: Vec<&str> = headers.iter().map(|(name, _)| *name).collect();
    let signed_headers = build_signed_headers_string(&names);

    format!("{method}\n{canonical_uri}\n\n{canonical_headers}\n\n{signed_headers}\n{payload_hash}")
}

/// Percent-encode each `/`-separated segment of an object path.
///
/// Only the unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) are
/// kept as is, so `?`, `#` and `%` in a key are encoded rather than read as a
/// query, a fragment or an escape. Both the signed canonical URI and the URL
/// sent on the wire are built with this function.
///
/// # Examples
///
/// ```
/// use strongbox_sigv4::canonical::encode_path;
///
/// assert_eq!(encode_path("mybucket/a?b"), "mybucket/a%3Fb");
/// assert_eq!(encode_path("mybucket/100%"), "mybucket/100%25");
/// ```
#[must_use]
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, URI_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the canonical URI from a literal object path.
///
/// Forward slashes are preserved and empty paths are normalized to `/`.
/// The path is taken literally: a `%` in a key is encoded as `%25`.
///
/// # Examples
///
/// ```
/// use strongbox_sigv4::canonical::build_canonical_uri;
///
/// assert_eq!(build_canonical_uri("/mybucket/mysecret"), "/mybucket/mysecret");
/// assert_eq!(build_canonical_uri("/mybucket/my secret"), "/mybucket/my%20secret");
/// assert_eq!(build_canonical_uri(""), "/");
/// ```
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    encode_path(path)
}

/// Build the canonical headers block.
///
/// Header names are lowercased and sorted, values are trimmed and runs of
/// whitespace are collapsed to a single space. Lines are joined with `\n`;
/// the terminating newline is added by [`build_canonical_request`].
///
/// [`sign`](crate::sign) always passes distinct lowercase names. For other
/// callers of this builder, repeated names have their values joined with
/// commas, as SigV4 requires.
///
/// # Examples
///
/// ```
/// use strongbox_sigv4::canonical::build_canonical_headers;
///
/// let result = build_canonical_headers(&[
///     ("X-Amz-Date", "19700101T000000Z"),
///     ("Host", " s3.amazonaws.com "),
/// ]);
/// assert_eq!(result, "host:s3.amazonaws.com\nx-amz-date:19700101T000000Z");
/// ```
#[must_use]
pub fn build_canonical_headers(headers: &[(&str, &str)]) -> String {
    let mut header_map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let trimmed_value = collapse_whitespace(value.trim());
        header_map
            .entry(name.to_lowercase())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&trimmed_value);
            })
            .or_insert(trimmed_value);
    }

    header_map
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the signed headers string: lowercase names, sorted, joined with `;`.
///
/// Repeated names are listed once, matching the comma-joined line that
/// [`build_canonical_headers`] emits for them.
///
/// # Examples
///
/// ```
/// use strongbox_sigv4::canonical::build_signed_headers_string;
///
/// assert_eq!(
///     build_signed_headers_string(&["x-amz-date", "Host"]),
///     "host;x-amz-date"
/// );
/// ```
#[must_use]
pub fn build_signed_headers_string(names: &[&str]) -> String {
    let mut sorted: Vec<String> = names.iter().map(|name| name.to_lowercase()).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.join(";")
}

/// Collapse consecutive whitespace characters in a string to a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}
