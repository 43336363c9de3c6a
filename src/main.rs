//! Gridtoe - terminal tic-tac-toe

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::{AppConfig, Cli};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = AppConfig::resolve(cli.config.as_deref(), cli.grid_size)?;
    info!(?config, "Configuration resolved");

    gridtoe::run_tui(config).await
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
