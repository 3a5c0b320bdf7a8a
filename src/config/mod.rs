//! Configuration module.
//!
//! Settings are read (never written) from a TOML file and layered with
//! environment variables and CLI flags. See [`loader`] for the precedence
//! chain.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, SnapSection,
};

use crate::layout::{DEFAULT_BACK_COLOR, DEFAULT_CAMERA_FAR_Z};
use crate::model::{
    ControlSchemeKind, SlotId, SnapSettings, ViewMode, DEFAULT_SPLITTER_THICKNESS,
};
use ratatui::style::Color;

/// Initial state of a design view.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignViewSettings {
    /// Grid split applied at construction.
    pub view_mode: ViewMode,
    /// Slot focused at construction.
    pub active_slot: SlotId,
    /// Divider thickness for modes that show one.
    pub splitter_thickness: u16,
    /// Background color pushed to every slot.
    pub back_color: Color,
    /// Far clip distance pushed to every slot camera.
    pub camera_far_z: f32,
    /// Input scheme selected at construction.
    pub control_scheme: ControlSchemeKind,
    /// Snapping behaviour.
    pub snap: SnapSettings,
}

impl Default for DesignViewSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Quad,
            active_slot: SlotId::TopLeft,
            splitter_thickness: DEFAULT_SPLITTER_THICKNESS,
            back_color: DEFAULT_BACK_COLOR,
            camera_far_z: DEFAULT_CAMERA_FAR_Z,
            control_scheme: ControlSchemeKind::Maya,
            snap: SnapSettings::default(),
        }
    }
}
