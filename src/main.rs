//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `cert_identity` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - One-shot certificate inspection (`--inspect`)
//! - Starting the serving surface
//!
//! All extraction and normalization logic lives in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cert_identity::initialization::{init_crypto_provider, init_logger_with};
use cert_identity::{
    flatten, init_registry, Config, IdentityBuilder, IdentitySource, UploadedBlobSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    init_crypto_provider();

    let registry = init_registry(config.oid_labels.as_deref())
        .context("Failed to initialize OID registry")?;

    // One-shot inspection: decode a local file through the upload path and
    // print the flattened identity.
    if let Some(path) = config.inspect.as_ref() {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let source = UploadedBlobSource::new(bytes);
        match source.adapt() {
            Ok(raw) => {
                let identity = IdentityBuilder::new(&registry).build(raw);
                let fields = flatten(&identity, &registry);
                let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
                for (label, value) in fields {
                    println!("{:<width$}  {}", label, value, width = width);
                }
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    cert_identity::run_server(&config, Arc::new(registry)).await
}
