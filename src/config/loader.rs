//! Configuration file loading with precedence handling.

use super::DesignViewSettings;
use crate::model::{ControlSchemeKind, SlotId, SnapFromMode, ViewMode};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DESIGNVIEW_CONFIG";
/// Environment variable overriding the initial view mode.
pub const VIEW_MODE_ENV: &str = "DESIGNVIEW_VIEW_MODE";
/// Environment variable overriding the control scheme.
pub const CONTROL_SCHEME_ENV: &str = "DESIGNVIEW_CONTROL_SCHEME";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permissions, I/O).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A field parsed as TOML but holds an unusable value.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/designview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial view mode ("single", "dual-horizontal", "dual-vertical", "quad").
    #[serde(default)]
    pub view_mode: Option<ViewMode>,

    /// Initially focused slot ("top-left", ...).
    #[serde(default)]
    pub active_slot: Option<SlotId>,

    /// Divider thickness in pixels.
    #[serde(default)]
    pub splitter_thickness: Option<u16>,

    /// Pane background: a color name, `#rrggbb` or an ANSI index.
    #[serde(default)]
    pub back_color: Option<String>,

    /// Far clip distance for every view camera.
    #[serde(default)]
    pub camera_far_z: Option<f32>,

    /// Input control scheme ("maya", "maya-laptop", "max").
    #[serde(default)]
    pub control_scheme: Option<ControlSchemeKind>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Snapping section.
    #[serde(default)]
    pub snap: Option<SnapSection>,
}

/// `[snap]` section.
///
/// ```toml
/// [snap]
/// vertex = true
/// from = "bottom-center"
/// angle = 15.0
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SnapSection {
    /// Snap to vertices.
    #[serde(default)]
    pub vertex: Option<bool>,

    /// Rotate onto the surface normal when snapping.
    #[serde(default)]
    pub rotate_on_snap: Option<bool>,

    /// Snap reference point.
    #[serde(default)]
    pub from: Option<SnapFromMode>,

    /// Manipulate along local axes.
    #[serde(default)]
    pub local_axis: Option<bool>,

    /// Rotation increment in degrees.
    #[serde(default)]
    pub angle: Option<f32>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Design view settings.
    pub view: DesignViewSettings,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            view: DesignViewSettings::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/designview/designview.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("designview").join("designview.log")
    } else {
        PathBuf::from("designview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/designview/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("designview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DESIGNVIEW_CONFIG` environment variable
/// 3. Default path
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unparseable `back_color`, a
/// non-positive `camera_far_z` or a non-finite `[snap] angle`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let back_color = match config.back_color {
        Some(raw) => Color::from_str(&raw).map_err(|e| ConfigError::InvalidValue {
            field: "back_color",
            reason: format!("'{raw}': {e}"),
        })?,
        None => defaults.view.back_color,
    };

    let camera_far_z = config.camera_far_z.unwrap_or(defaults.view.camera_far_z);
    if !(camera_far_z.is_finite() && camera_far_z > 0.0) {
        return Err(ConfigError::InvalidValue {
            field: "camera_far_z",
            reason: format!("must be a positive distance, got {camera_far_z}"),
        });
    }

    let mut snap = defaults.view.snap;
    let section = config.snap.unwrap_or_default();
    snap.snap_vertex = section.vertex.unwrap_or(snap.snap_vertex);
    snap.rotate_on_snap = section.rotate_on_snap.unwrap_or(snap.rotate_on_snap);
    snap.snap_from = section.from.unwrap_or(snap.snap_from);
    snap.manipulate_local_axis = section.local_axis.unwrap_or(snap.manipulate_local_axis);
    if let Some(angle) = section.angle {
        if !angle.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "snap.angle",
                reason: format!("must be a finite angle in degrees, got {angle}"),
            });
        }
        snap.set_snap_angle(angle);
    }

    Ok(ResolvedConfig {
        view: DesignViewSettings {
            view_mode: config.view_mode.unwrap_or(defaults.view.view_mode),
            active_slot: config.active_slot.unwrap_or(defaults.view.active_slot),
            splitter_thickness: config
                .splitter_thickness
                .unwrap_or(defaults.view.splitter_thickness),
            back_color,
            camera_far_z,
            control_scheme: config.control_scheme.unwrap_or(defaults.view.control_scheme),
            snap,
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `DESIGNVIEW_VIEW_MODE` and `DESIGNVIEW_CONTROL_SCHEME`.
/// Unrecognised values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(mode) = env_value::<ViewMode>(VIEW_MODE_ENV) {
        config.view.view_mode = mode;
    }

    if let Some(scheme) = env_value::<ControlSchemeKind>(CONTROL_SCHEME_ENV) {
        config.view.control_scheme = scheme;
    }

    config
}

fn env_value<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = name, error = %e, "Ignoring invalid environment override");
            None
        }
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    view_mode: Option<ViewMode>,
    active_slot: Option<SlotId>,
    control_scheme: Option<ControlSchemeKind>,
) -> ResolvedConfig {
    if let Some(mode) = view_mode {
        config.view.view_mode = mode;
    }

    if let Some(slot) = active_slot {
        config.view.active_slot = slot;
    }

    if let Some(scheme) = control_scheme {
        config.view.control_scheme = scheme;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
