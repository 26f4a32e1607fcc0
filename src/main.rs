//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_scanner` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Starting the web UI
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ip_scanner::config::Opt;
use ip_scanner::initialization::init_logger_with;
use ip_scanner::web::start_server;
use ip_scanner::{Config, GeoLookup};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    log::info!(
        "Primary provider: {} | fallback: {} | timeout {:?}",
        config.primary.endpoint,
        config.secondary.endpoint,
        config.primary.timeout
    );

    let lookup = GeoLookup::from_config(&config).context("Failed to initialize providers")?;

    if let Err(e) = start_server(&config.bind, config.port, Arc::new(lookup)).await {
        eprintln!("ip_scanner error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
