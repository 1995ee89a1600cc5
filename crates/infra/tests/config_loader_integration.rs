//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use bizhub_infra::config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "api": {
            "base_url": "http://backend.internal:8001",
            "origin": "http://app.internal:3000",
            "timeout_secs": 15
        },
        "storage": { "path": "/tmp/bizhub-integration.json" },
        "logging": { "level": "bizhub_infra=debug", "json": true }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(&path);
    std::fs::remove_file(&path).ok();

    let config = result.expect("Failed to load config from JSON file");
    assert_eq!(config.api.base_url, "http://backend.internal:8001");
    assert_eq!(config.api.origin, "http://app.internal:3000");
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.storage.path, PathBuf::from("/tmp/bizhub-integration.json"));
    assert_eq!(config.logging.level, "bizhub_infra=debug");
    assert!(config.logging.json);
}

#[test]
fn test_load_config_from_partial_toml_file() {
    let toml_content = r#"
[api]
timeout_secs = 5
"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(&path);
    std::fs::remove_file(&path).ok();

    let config = result.expect("Failed to load config from TOML file");
    assert_eq!(config.api.timeout_secs, 5);
    assert_eq!(config.api.base_url, "http://localhost:8001");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let result = config::load(Some(PathBuf::from("/nonexistent/bizhub.toml")));
    assert!(result.is_err());
}
