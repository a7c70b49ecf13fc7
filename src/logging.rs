//! Tracing subscriber setup.
//!
//! The terminal belongs to the presentation, so log lines go to a file or
//! nowhere at all.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, then the configured level, then `info`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Without a log file no subscriber is
/// installed and events are dropped.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
