//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `link_resolver` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C driven shutdown
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use link_resolver::app::cancel_on_ctrl_c;
use link_resolver::initialization::init_logger_with;
use link_resolver::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; flags and real env vars still apply
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    if let Err(e) = run_server(config, shutdown).await {
        eprintln!("link_resolver error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
