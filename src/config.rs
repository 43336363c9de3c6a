//! Application configuration.
//!
//! Settings come from, in increasing precedence: built-in defaults, a TOML
//! file, the `GRIDTOE_GRID_SIZE` environment variable (a `.env` file is
//! honoured), and command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtoe_core::{DEFAULT_TICK_PERIOD, GridSize};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gridtoe.toml";

/// Environment variable overriding the starting grid size.
pub const GRID_SIZE_ENV: &str = "GRIDTOE_GRID_SIZE";

/// Runtime settings for the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Board side for the first match.
    #[getter(skip)]
    grid_size: usize,

    /// Match clock tick period in milliseconds.
    tick_interval_ms: u64,

    /// Pause between the end of a match and the result dialog, in milliseconds.
    result_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::DEFAULT.side(),
            tick_interval_ms: DEFAULT_TICK_PERIOD.as_millis() as u64,
            result_delay_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, or the default file if present, or built-in defaults.
    ///
    /// An explicitly given path must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolves the full precedence chain and validates the result.
    #[instrument]
    pub fn resolve(path: Option<&Path>, cli_grid_size: Option<usize>) -> Result<Self, ConfigError> {
        Self::load(path)?
            .with_env_grid_size(std::env::var(GRID_SIZE_ENV).ok().as_deref())?
            .with_grid_size(cli_grid_size)
            .validated()
    }

    /// Applies a raw grid size taken from the environment.
    #[instrument(skip(self))]
    pub fn with_env_grid_size(self, raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw else {
            return Ok(self);
        };
        let side = raw.trim().parse::<usize>().map_err(|e| {
            ConfigError::new(format!("{} must be a number, got {:?}: {}", GRID_SIZE_ENV, raw, e))
        })?;
        debug!(side, "Grid size from environment");
        Ok(self.with_grid_size(Some(side)))
    }

    /// Overrides the grid size when one is given.
    pub fn with_grid_size(mut self, side: Option<usize>) -> Self {
        if let Some(side) = side {
            self.grid_size = side;
        }
        self
    }

    /// Clamps the grid size into range and rejects unusable timings.
    #[instrument(skip(self))]
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::new(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }

        let clamped = GridSize::clamped(self.grid_size);
        if clamped.side() != self.grid_size {
            warn!(
                requested = self.grid_size,
                using = clamped.side(),
                "Grid size out of range, clamping"
            );
            self.grid_size = clamped.side();
        }
        Ok(self)
    }

    /// Returns the starting grid size.
    pub fn grid_size(&self) -> GridSize {
        GridSize::clamped(self.grid_size)
    }

    /// Returns the match clock tick period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Returns the delay before the result dialog appears.
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
