//! Strongbox Fetch - retrieve one secret object from S3.
//!
//! Signs a GET with AWS Signature Version 4 and streams the object body to
//! stdout, or to a file with `--output`. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! STRONGBOX_BUCKET=mybucket STRONGBOX_PATH=mysecret strongbox-fetch --output secret.pem
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STRONGBOX_BUCKET` | *(required)* | Bucket holding the secret |
//! | `STRONGBOX_PATH` | *(required)* | Object key of the secret |
//! | `AWS_ACCESS_KEY_ID` | *(required)* | Access key ID |
//! | `AWS_SECRET_ACCESS_KEY` | *(required)* | Secret access key |
//! | `AWS_SESSION_TOKEN` | *(unset)* | Session token for temporary credentials |
//! | `AWS_REGION` / `AWS_DEFAULT_REGION` | `us-east-1` | Bucket region |
//! | `STRONGBOX_ENDPOINT_URL` | *(unset)* | S3-compatible endpoint to send requests to |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use strongbox_core::FetchConfig;
use strongbox_s3::{ReqwestConnector, sign_and_get};
use strongbox_sigv4::SigningRequest;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Version logged at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetch a secret object from S3 with a SigV4-signed GET.
///
/// Bucket, key, credentials and region are read from the environment.
#[derive(Debug, Parser)]
#[command(name = "strongbox-fetch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write the object body to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Copy the response body to `output`, or to stdout when no path is given.
///
/// Returns the number of bytes written.
fn write_body(mut body: impl Read, output: Option<&Path>) -> Result<u64> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let written = io::copy(&mut body, &mut file)
                .with_context(|| format!("cannot write {}", path.display()))?;
            file.flush()?;
            Ok(written)
        }
        None => {
            let mut stdout = io::stdout().lock();
            let written = io::copy(&mut body, &mut stdout).context("cannot write to stdout")?;
            stdout.flush()?;
            Ok(written)
        }
    }
}

/// Build the transport, honouring an endpoint override from the config.
fn build_connector(config: &FetchConfig) -> Result<ReqwestConnector> {
    let connector = ReqwestConnector::new().context("cannot initialize HTTP client")?;
    Ok(match &config.endpoint_url {
        Some(endpoint) => {
            debug!(endpoint = %endpoint, "using endpoint override");
            connector.endpoint_override(endpoint)
        }
        None => connector,
    })
}

fn run(args: &Args) -> Result<()> {
    let config = FetchConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.log_level)?;

    info!(
        bucket = %config.bucket,
        path = %config.path,
        region = %config.region,
        version = VERSION,
        "fetching secret",
    );

    let request = SigningRequest::from_config(&config, Utc::now())
        .context("invalid fetch parameters")?;
    let connector = build_connector(&config)?;

    let response = sign_and_get(&connector, &request)?;
    let written = write_body(response, args.output.as_deref())?;

    info!(bytes = written, "secret fetched");

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}
