//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;

use rewind::{AppConfig, SortOrder};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_without_file() {
    let config = AppConfig::load(None).expect("defaults");
    assert_eq!(*config.sort_order(), SortOrder::Ascending);
    assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
sort_order = "descending"
log_file = "/tmp/rewind-test.log"
log_filter = "rewind=debug"
"#,
    );
    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
    assert_eq!(config.log_filter(), "rewind=debug");
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config("sort_order = \"descending\"\n");
    let config = AppConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_invalid_config_is_rejected() {
    let file = write_config("sort_order = \"sideways\"\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let file = write_config("colour = \"blue\"\n");
    assert!(AppConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}
