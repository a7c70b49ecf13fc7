mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::temp_file;
use slidedeck::config::{Config, ConfigError};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.presentation.settle_ms, 600);
    assert_eq!(config.presentation.tick_rate_ms, 250);
    assert!(config.presentation.mouse);
    assert!(config.presentation.deck.is_none());
    assert_eq!(config.presentation.settle(), Duration::from_millis(600));

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("slidedeck/config.toml"));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (dir, path) = temp_file(
        "config.toml",
        r#"
[presentation]
settle_ms = 300
deck = "talk.json"

[logging]
file = "/tmp/slidedeck.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.presentation.settle_ms, 300);
    assert_eq!(config.presentation.tick_rate_ms, 250);
    assert!(config.presentation.mouse);
    assert_eq!(config.presentation.deck, Some(dir.path().join("talk.json")));
    assert_eq!(config.logging.level, "info");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/slidedeck.log"))
    );
}

#[test]
fn test_absolute_deck_path_is_kept() {
    let (_dir, path) = temp_file(
        "config.toml",
        "[presentation]\ndeck = \"/srv/talks/keynote.toml\"\n",
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.presentation.deck,
        Some(PathBuf::from("/srv/talks/keynote.toml"))
    );
}

#[test]
fn test_zero_settle_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[presentation]\nsettle_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("settle_ms"));
}

#[test]
fn test_settle_above_limit_fails_validation() {
    let mut config = Config::default();
    config.presentation.settle_ms = 10_001;
    assert!(config.validate().is_err());
    config.presentation.settle_ms = 10_000;
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.presentation.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[presentation\nsettle_ms = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
