//! Environment overrides for Settings. Kept in its own test binary since it
//! mutates process-wide `SFC_*` variables.

use std::env;
use std::fs;

use tempfile::TempDir;

use sfc::application::OutputFormat;
use sfc::config::Settings;

#[test]
fn given_env_vars_when_load_then_override_file_values() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sfc.toml");
    fs::write(&path, "curve = \"koch\"\nthickness = 2.0\n").unwrap();
    env::set_var("SFC_CURVE", "dragon");
    env::set_var("SFC_FORMAT", "path");
    env::set_var("SFC_OUTPUT_DIR", dir.path());

    // Act
    let settings = Settings::load(Some(path.as_path()));

    env::remove_var("SFC_CURVE");
    env::remove_var("SFC_FORMAT");
    env::remove_var("SFC_OUTPUT_DIR");

    // Assert
    let settings = settings.expect("load settings");
    assert_eq!(settings.curve, "dragon");
    assert_eq!(settings.format, OutputFormat::Path);
    assert_eq!(settings.output_dir, dir.path());
    assert_eq!(settings.thickness, 2.0);
}
