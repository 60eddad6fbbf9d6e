//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sfc/sfc.toml`
//! 3. Explicit config file (`--config FILE`)
//! 4. Environment variables: `SFC_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::DepthPolicy;
use crate::application::state::{DEFAULT_COLOR, DEFAULT_DEPTH, DEFAULT_THICKNESS};
use crate::application::{ApplicationError, CurveState, OutputFormat};
use crate::domain::DEFAULT_CURVE;

/// Raw settings for intermediate parsing (every field optional).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub curve: Option<String>,
    pub depth: Option<i64>,
    pub thickness: Option<f64>,
    pub color: Option<String>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
    pub depth_policy: Option<DepthPolicy>,
}

/// Unified configuration for sfc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Curve rendered when none is given
    pub curve: String,
    /// User depth when none is given
    pub depth: i64,
    /// Stroke thickness
    pub thickness: f64,
    /// Stroke color, passed through to the output
    pub color: String,
    /// Output format for `render`
    pub format: OutputFormat,
    /// Directory for downloads and gallery output
    pub output_dir: PathBuf,
    /// Clamp or reject out-of-range depths
    pub depth_policy: DepthPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curve: DEFAULT_CURVE.into(),
            depth: DEFAULT_DEPTH,
            thickness: DEFAULT_THICKNESS,
            color: DEFAULT_COLOR.into(),
            format: OutputFormat::default(),
            output_dir: PathBuf::from("."),
            depth_policy: DepthPolicy::default(),
        }
    }
}

/// Get the XDG config directory for sfc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sfc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sfc.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`, leaving the input unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// The state a bare `render` starts from.
    pub fn default_state(&self) -> CurveState {
        CurveState {
            name: self.curve.clone(),
            depth: self.depth,
            thickness: self.thickness,
            color: self.color.clone(),
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.output_dir.to_string_lossy().as_ref());
        self.output_dir = PathBuf::from(expanded);
    }

    /// Merge overlay config onto self (base). Overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            curve: overlay.curve.clone().unwrap_or_else(|| self.curve.clone()),
            depth: overlay.depth.unwrap_or(self.depth),
            thickness: overlay.thickness.unwrap_or(self.thickness),
            color: overlay.color.clone().unwrap_or_else(|| self.color.clone()),
            format: overlay.format.unwrap_or(self.format),
            output_dir: overlay
                .output_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.clone()),
            depth_policy: overlay.depth_policy.unwrap_or(self.depth_policy),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/sfc/sfc.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `SFC_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: config file {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        Ok(current)
    }

    /// Apply SFC_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix("SFC")
                .prefix_separator("_")
                .separator("__"),
        );
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("curve") {
            settings.curve = val;
        }
        if let Ok(val) = config.get_int("depth") {
            settings.depth = val;
        }
        if let Ok(val) = config.get_float("thickness") {
            settings.thickness = val;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format =
                OutputFormat::from_str(&val, true).map_err(|e| ApplicationError::Config {
                    message: format!("SFC_FORMAT: {e}"),
                })?;
        }
        if let Ok(val) = config.get_string("output_dir") {
            settings.output_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("depth_policy") {
            settings.depth_policy = match val.to_ascii_lowercase().as_str() {
                "clamp" => DepthPolicy::Clamp,
                "strict" => DepthPolicy::Strict,
                other => {
                    return Err(ApplicationError::Config {
                        message: format!("SFC_DEPTH_POLICY: unknown policy '{other}'"),
                    })
                }
            };
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# sfc configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/sfc/sfc.toml   (your baseline)
#   File:   sfc --config FILE        (explicit file)
#   Env:    SFC_* environment variables (explicit overrides)

# Curve rendered when none is given (see `sfc list`)
# curve = "koch"

# User depth when none is given
# depth = 2

# Stroke thickness
# thickness = 3.0

# Stroke color, written to the SVG as-is
# color = "black"

# Output format for `sfc render`: svg, path or json
# format = "svg"

# Directory for --download and `sfc gallery`
# output_dir = "~/Pictures/curves"

# Out-of-range depths: "clamp" (saturate) or "strict" (error)
# depth_policy = "clamp"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
