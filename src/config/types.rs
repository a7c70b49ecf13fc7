use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::navigation::DEFAULT_SETTLE;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Settle period of a slide transition in milliseconds (default: 600).
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Input poll / tick period in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks for the navigation bar (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
    /// Deck file to present. The bundled deck is used when unset. Relative
    /// paths in a config file are relative to that file.
    #[serde(default)]
    pub deck: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The terminal is owned by the UI, so logs are discarded
    /// when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE.as_millis() as u64
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PresentationConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
            deck: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
