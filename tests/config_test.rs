//! Integration tests for Settings loading with layered precedence.
//!
//! These tests never set `SFC_*` variables; env overrides live in
//! `config_env_test.rs` so they cannot leak into parallel tests here.

use std::fs;

use tempfile::TempDir;

use sfc::application::services::DepthPolicy;
use sfc::application::{ApplicationError, OutputFormat};
use sfc::config::Settings;

#[test]
fn given_explicit_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sfc.toml");
    fs::write(
        &path,
        r#"
curve = "gosper"
depth = 4
format = "json"
depth_policy = "strict"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.curve, "gosper");
    assert_eq!(settings.depth, 4);
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.depth_policy, DepthPolicy::Strict);
    // untouched keys keep their defaults
    assert_eq!(settings.color, "black");
}

#[test]
fn given_missing_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{err}");
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "depth = [not toml").unwrap();

    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{err}");
}

#[test]
fn given_unknown_format_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sfc.toml");
    fs::write(&path, "format = \"png\"\n").unwrap();

    assert!(Settings::load(Some(path.as_path())).is_err());
}

#[test]
fn given_output_dir_with_tilde_when_load_then_expanded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sfc.toml");
    fs::write(&path, "output_dir = \"~/curves\"\n").unwrap();

    let settings = Settings::load(Some(path.as_path())).unwrap();
    assert!(!settings.output_dir.to_string_lossy().starts_with('~'));
    assert!(settings.output_dir.ends_with("curves"));
}
