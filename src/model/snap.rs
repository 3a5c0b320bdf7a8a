//! Snapping configuration consumed by manipulators.

use super::error::ParseEnumError;
use serde::Deserialize;
use std::f32::consts::PI;
use std::str::FromStr;

/// Default rotation snap increment.
pub const DEFAULT_SNAP_ANGLE_DEGREES: f32 = 5.0;

/// Which point of an object is snapped onto the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapFromMode {
    /// The object's pivot.
    #[default]
    Pivot,
    /// The object's local origin.
    Origin,
    /// Center of the bottom face of the bounding box.
    BottomCenter,
}

impl FromStr for SnapFromMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pivot" => Ok(SnapFromMode::Pivot),
            "origin" => Ok(SnapFromMode::Origin),
            "bottom-center" => Ok(SnapFromMode::BottomCenter),
            other => Err(ParseEnumError::new(
                "snap-from mode",
                other,
                "pivot, origin, bottom-center",
            )),
        }
    }
}

/// Snap settings bag.
///
/// Plain configuration, not derived state. The rotation increment is kept in
/// radians and read/written in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// Snap to mesh vertices while dragging.
    pub snap_vertex: bool,
    /// Align rotation to the surface normal when snapping.
    pub rotate_on_snap: bool,
    /// Reference point used when snapping.
    pub snap_from: SnapFromMode,
    /// Manipulate in the object's local frame instead of world axes.
    pub manipulate_local_axis: bool,
    snap_angle: f32,
}

impl SnapSettings {
    /// Rotation increment in degrees.
    pub fn snap_angle(&self) -> f32 {
        self.snap_angle * (180.0 / PI)
    }

    /// Set the rotation increment in degrees.
    pub fn set_snap_angle(&mut self, degrees: f32) {
        self.snap_angle = degrees * (PI / 180.0);
    }

    /// Rotation increment in radians.
    pub fn snap_angle_radians(&self) -> f32 {
        self.snap_angle
    }

    /// Round `radians` to the nearest multiple of the snap increment.
    ///
    /// A non-positive increment disables rotation snapping.
    pub fn snap_rotation(&self, radians: f32) -> f32 {
        if self.snap_angle <= 0.0 {
            return radians;
        }
        (radians / self.snap_angle).round() * self.snap_angle
    }
}

impl Default for SnapSettings {
    fn default() -> Self {
        let mut settings = Self {
            snap_vertex: false,
            rotate_on_snap: false,
            snap_from: SnapFromMode::default(),
            manipulate_local_axis: false,
            snap_angle: 0.0,
        };
        settings.set_snap_angle(DEFAULT_SNAP_ANGLE_DEGREES);
        settings
    }
}
