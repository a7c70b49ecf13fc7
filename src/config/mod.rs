//! Configuration file handling.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_SETTLE_MS};
pub use types::{Config, LoggingConfig, PresentationConfig};
