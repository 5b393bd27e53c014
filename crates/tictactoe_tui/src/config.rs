//! View configuration loaded from TOML and overridden from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Settings for the terminal game view.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Milliseconds a finished game's result stays emphasised.
    #[serde(default = "default_result_flash_ms")]
    result_flash_ms: u64,

    /// Milliseconds to wait for input before redrawing.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Capture the mouse so cells can be clicked.
    #[serde(default = "default_mouse")]
    mouse: bool,

    /// Log destination.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_result_flash_ms() -> u64 {
    1500
}

fn default_tick_ms() -> u64 {
    100
}

fn default_mouse() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            result_flash_ms: default_result_flash_ms(),
            tick_ms: default_tick_ms(),
            mouse: default_mouse(),
            log_file: default_log_file(),
        }
    }
}

impl ViewConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Builds the effective configuration: defaults, then the `--config`
    /// file if one was given, then command-line overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        if cli.no_mouse {
            config.mouse = false;
        }
        if let Some(ms) = cli.result_flash_ms {
            config.result_flash_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }

    /// Result display delay as a [`Duration`].
    pub fn result_flash(&self) -> Duration {
        Duration::from_millis(self.result_flash_ms)
    }

    /// Input poll timeout as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be greater than zero".to_string()));
        }
        Ok(())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
