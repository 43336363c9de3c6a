//! Command-line interface for gridtoe.

use clap::Parser;
use std::path::PathBuf;

/// Gridtoe - two-player tic-tac-toe on boards from 3x3 to 9x9
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Two-player tic-tac-toe with match clocks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length for the first match (3-9, clamped)
    #[arg(short, long)]
    pub grid_size: Option<usize>,

    /// Path to a TOML config file (defaults to ./gridtoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File receiving log output
    #[arg(long, default_value = "gridtoe.log")]
    pub log_file: PathBuf,
}
