//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use strictly_replay::ReplayConfig;
use strictly_tictactoe::DisplayOrder;

#[test]
fn test_defaults() {
    let config = ReplayConfig::default();
    assert_eq!(*config.display_order(), DisplayOrder::Ascending);
    assert_eq!(config.sort_label(), "Sort");
    assert_eq!(config.log_file(), &PathBuf::from("strictly_replay.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "display_order = \"descending\"").unwrap();
    writeln!(file, "sort_label = \"並び替え\"").unwrap();

    let config = ReplayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.display_order(), DisplayOrder::Descending);
    assert_eq!(config.sort_label(), "並び替え");
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_invalid_order_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "display_order = \"sideways\"").unwrap();

    let err = ReplayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = ReplayConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
