//! Gridtoe - terminal tic-tac-toe on boards from 3x3 to 9x9
//!
//! Two players share one keyboard. The game logic lives in
//! [`gridtoe_core`]; this crate adds the command line, configuration and
//! the terminal frontend that drives a [`gridtoe_core::Session`].
//!
//! # Architecture
//!
//! - **Cli**: flag parsing with clap
//! - **Config**: TOML file, environment and flag precedence
//! - **Tui**: ratatui rendering plus a tokio event loop that funnels key
//!   presses, clock ticks and delayed result notices through one channel

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, GRID_SIZE_ENV};

// Crate-level exports - Terminal frontend
pub use tui::{
    Action, App, AppEvent, Control, Cursor, action_for, run_tui, schedule_result,
    spawn_input_reader, spawn_ticker,
};
