//! Common AWS type definitions.

use std::fmt;
use std::str::FromStr;

use crate::StrongboxError;

/// AWS Region identifier.
///
/// The region selects both the SigV4 credential scope and the S3 endpoint
/// that requests are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region, served by the global S3 endpoint.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    ///
    /// # Errors
    /// Returns an error if the region is empty or contains whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use strongbox_core::AwsRegion;
    ///
    /// let region = AwsRegion::new("eu-west-1").unwrap();
    /// assert_eq!(region.as_str(), "eu-west-1");
    /// assert!(AwsRegion::new("").is_err());
    /// ```
    pub fn new(region: impl Into<String>) -> Result<Self, StrongboxError> {
        let region = region.into();
        if region.is_empty() || region.chars().any(char::is_whitespace) {
            return Err(StrongboxError::InvalidRegion(region));
        }
        Ok(Self(region))
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hostname of the S3 endpoint for this region.
    ///
    /// `us-east-1` is served by the global `s3.amazonaws.com` endpoint, every
    /// other region by the dash-style `s3-{region}.amazonaws.com` endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use strongbox_core::AwsRegion;
    ///
    /// assert_eq!(AwsRegion::default().s3_hostname(), "s3.amazonaws.com");
    /// assert_eq!(
    ///     AwsRegion::new("us-west-2").unwrap().s3_hostname(),
    ///     "s3-us-west-2.amazonaws.com"
    /// );
    /// ```
    #[must_use]
    pub fn s3_hostname(&self) -> String {
        if self.0 == Self::DEFAULT {
            "s3.amazonaws.com".to_owned()
        } else {
            format!("s3-{}.amazonaws.com", self.0)
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AwsRegion {
    type Err = StrongboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AwsRegion {
    type Error = StrongboxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AwsRegion> for String {
    fn from(region: AwsRegion) -> Self {
        region.0
    }
}
