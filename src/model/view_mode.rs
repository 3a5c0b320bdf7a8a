//! View modes, grid slots and the layout parameters derived from them.

use super::error::ParseEnumError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Splitter thickness in pixels used by every mode that shows a divider.
pub const DEFAULT_SPLITTER_THICKNESS: u16 = 8;

/// How the 2x2 view grid is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// One full-size view.
    Single,
    /// Two views stacked top and bottom (horizontal divider).
    DualHorizontal,
    /// Two views side by side (vertical divider).
    DualVertical,
    /// Full four-way grid.
    #[default]
    Quad,
}

impl ViewMode {
    /// Every mode, in declaration order.
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Single,
        ViewMode::DualHorizontal,
        ViewMode::DualVertical,
        ViewMode::Quad,
    ];

    /// Config/CLI name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Single => "single",
            ViewMode::DualHorizontal => "dual-horizontal",
            ViewMode::DualVertical => "dual-vertical",
            ViewMode::Quad => "quad",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                ParseEnumError::new("view mode", s, "single, dual-horizontal, dual-vertical, quad")
            })
    }
}

/// One of the four fixed positions in the view grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotId {
    /// Upper left pane.
    #[default]
    TopLeft,
    /// Upper right pane.
    TopRight,
    /// Lower left pane.
    BottomLeft,
    /// Lower right pane.
    BottomRight,
}

impl SlotId {
    /// Every slot in grid storage order.
    pub const ALL: [SlotId; 4] = [
        SlotId::TopLeft,
        SlotId::TopRight,
        SlotId::BottomLeft,
        SlotId::BottomRight,
    ];

    /// Storage index of the slot (row-major).
    pub fn index(self) -> usize {
        match self {
            SlotId::TopLeft => 0,
            SlotId::TopRight => 1,
            SlotId::BottomLeft => 2,
            SlotId::BottomRight => 3,
        }
    }

    /// Whether the slot is in the top row.
    pub fn is_top(self) -> bool {
        matches!(self, SlotId::TopLeft | SlotId::TopRight)
    }

    /// Whether the slot is in the left column.
    pub fn is_left(self) -> bool {
        matches!(self, SlotId::TopLeft | SlotId::BottomLeft)
    }

    /// Slot in the same row, other column.
    pub fn column_mirror(self) -> SlotId {
        match self {
            SlotId::TopLeft => SlotId::TopRight,
            SlotId::TopRight => SlotId::TopLeft,
            SlotId::BottomLeft => SlotId::BottomRight,
            SlotId::BottomRight => SlotId::BottomLeft,
        }
    }

    /// Slot in the same column, other row.
    pub fn row_mirror(self) -> SlotId {
        match self {
            SlotId::TopLeft => SlotId::BottomLeft,
            SlotId::TopRight => SlotId::BottomRight,
            SlotId::BottomLeft => SlotId::TopLeft,
            SlotId::BottomRight => SlotId::TopRight,
        }
    }

    /// Config/CLI name of the slot.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::TopLeft => "top-left",
            SlotId::TopRight => "top-right",
            SlotId::BottomLeft => "bottom-left",
            SlotId::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotId {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| {
                ParseEnumError::new("slot", s, "top-left, top-right, bottom-left, bottom-right")
            })
    }
}

/// Split configuration of the view grid.
///
/// A split ratio of 0.0 or 1.0 collapses one side of that axis to nothing,
/// which is how the dual modes hide half of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParameters {
    /// Fraction of the width given to the left column.
    pub split_x: f32,
    /// Fraction of the height given to the top row.
    pub split_y: f32,
    /// Whether the vertical divider (between columns) is active.
    pub enable_x: bool,
    /// Whether the horizontal divider (between rows) is active.
    pub enable_y: bool,
    /// Divider thickness in pixels.
    pub splitter_thickness: u16,
}

impl LayoutParameters {
    /// Derive the grid parameters for `mode` with `active` focused.
    ///
    /// Single and Quad ignore `active`.
    ///
    /// DualHorizontal splits rows only and shows the left column when
    /// `active` is in the top row, the right column otherwise.
    /// DualVertical splits columns only and shows the top row when `active`
    /// is in the left column, the bottom row otherwise. Top-right and
    /// bottom-left are therefore never shown in either dual mode; the grid
    /// moves focus off them (see [`QuadLayout`](crate::layout::QuadLayout)).
    pub fn for_mode(mode: ViewMode, active: SlotId, splitter_thickness: u16) -> Self {
        match mode {
            ViewMode::Single => Self {
                split_x: 1.0,
                split_y: 1.0,
                enable_x: false,
                enable_y: false,
                splitter_thickness: 0,
            },
            ViewMode::DualHorizontal => Self {
                split_x: if active.is_top() { 1.0 } else { 0.0 },
                split_y: 0.5,
                enable_x: false,
                enable_y: true,
                splitter_thickness,
            },
            ViewMode::DualVertical => Self {
                split_x: 0.5,
                split_y: if active.is_left() { 1.0 } else { 0.0 },
                enable_x: true,
                enable_y: false,
                splitter_thickness,
            },
            ViewMode::Quad => Self {
                split_x: 0.5,
                split_y: 0.5,
                enable_x: true,
                enable_y: true,
                splitter_thickness,
            },
        }
    }
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self::for_mode(ViewMode::Quad, SlotId::TopLeft, DEFAULT_SPLITTER_THICKNESS)
    }
}
