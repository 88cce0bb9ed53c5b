//! Tests for console configuration loading.

use std::io::Write;
use tictactoe_engine::ConsoleConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, ConsoleConfig::default());
    assert_eq!(config.log_filter(), "warn");
    assert!(*config.show_cell_numbers());
    assert!(!*config.json());
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_cell_numbers = false").expect("write config");

    let config = ConsoleConfig::from_file(file.path()).expect("valid config");
    assert!(!*config.show_cell_numbers());
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_filter = \"tictactoe_engine=debug\"\njson = true").expect("write config");

    let config = ConsoleConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "tictactoe_engine=debug");
    assert!(*config.json());
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "json = \"sometimes\"").expect("write config");

    let err = ConsoleConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
