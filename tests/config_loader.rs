use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use test_hosting_app::config::{Config, ConfigError};

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::read_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.mouse);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
mouse = false
"#,
    );
    let config = Config::read_from(&path).unwrap();
    assert!(!config.ui.mouse);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 100
mouse = true

[logging]
level = "test_hosting_app=debug"
file = "/tmp/hosting.log"
"#,
    );
    let config = Config::read_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "test_hosting_app=debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/hosting.log")));
}

#[test]
fn malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");
    let err = Config::read_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err}");
}

#[test]
fn out_of_range_tick_rate_is_validation_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::read_from(&path).unwrap().validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn invalid_log_level_is_validation_error() {
    let mut config = Config::default();
    config.logging.level = "test_hosting_app=loud".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn read_from_skips_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let config = Config::read_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 0);
    assert!(config.validate().is_err());
}
