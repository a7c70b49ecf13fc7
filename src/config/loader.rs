use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound for the transition settle period.
pub const MAX_SETTLE_MS: u64 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/slidedeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("slidedeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates the TOML file at `path`. The file must exist.
    ///
    /// A relative `presentation.deck` is resolved against the file's
    /// directory.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let (Some(deck), Some(dir)) = (&config.presentation.deck, path.parent()) {
            if deck.is_relative() {
                config.presentation.deck = Some(dir.join(deck));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `settle_ms` is in `1..=MAX_SETTLE_MS`
    /// - `tick_rate_ms` is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let settle_ms = self.presentation.settle_ms;
        if settle_ms == 0 || settle_ms > MAX_SETTLE_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "presentation.settle_ms must be between 1 and {MAX_SETTLE_MS}, got {settle_ms}"
                ),
            });
        }

        if self.presentation.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "presentation.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
