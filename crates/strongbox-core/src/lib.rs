//! Core types, configuration, and errors for Strongbox.
//!
//! This crate provides the building blocks shared by the signer, the fetch
//! layer, and the command-line tool: the [`AwsRegion`] type (which also
//! resolves the S3 endpoint hostname for a region), environment-driven
//! [`FetchConfig`], and the [`StrongboxError`] type.

mod config;
mod error;
mod types;

pub use config::FetchConfig;
pub use error::{StrongboxError, StrongboxResult};
pub use types::AwsRegion;
