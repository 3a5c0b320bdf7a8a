//! A single pane of the view grid.

use crate::model::{CursorHint, Point, SlotId};
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::fmt;

/// Default far clip distance applied to every slot camera.
pub const DEFAULT_CAMERA_FAR_Z: f32 = 2048.0;

/// Default pane background (a dark control grey).
pub const DEFAULT_BACK_COLOR: Color = Color::Rgb(0xa0, 0xa0, 0xa0);

/// Camera attached to a view slot.
///
/// The renderer owns the projection math; the core only pushes the far clip
/// distance through this trait.
pub trait Camera: fmt::Debug {
    /// Distance to the far clipping plane.
    fn far_z(&self) -> f32;

    /// Set the distance to the far clipping plane.
    fn set_far_z(&mut self, far_z: f32);
}

/// Camera that only records its clip planes.
///
/// Enough for headless hosts and tests; real hosts plug in their renderer's
/// camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipCamera {
    /// Near clipping distance.
    pub near_z: f32,
    /// Far clipping distance.
    pub far_z: f32,
}

impl Default for ClipCamera {
    fn default() -> Self {
        Self {
            near_z: 0.1,
            far_z: DEFAULT_CAMERA_FAR_Z,
        }
    }
}

impl Camera for ClipCamera {
    fn far_z(&self) -> f32 {
        self.far_z
    }

    fn set_far_z(&mut self, far_z: f32) {
        self.far_z = far_z;
    }
}

/// One of the four panes of the grid.
///
/// A slot whose extent is 1 pixel or less along either axis is degenerate:
/// it is hidden and receives no redraws.
#[derive(Debug)]
pub struct ViewSlot {
    id: SlotId,
    area: Rect,
    camera: Box<dyn Camera>,
    back_color: Color,
    cursor: CursorHint,
    invalidations: u64,
    dirty: bool,
}

impl ViewSlot {
    /// Create a slot with an empty extent.
    pub fn new(id: SlotId, camera: Box<dyn Camera>) -> Self {
        Self {
            id,
            area: Rect::default(),
            camera,
            back_color: DEFAULT_BACK_COLOR,
            cursor: CursorHint::Default,
            invalidations: 0,
            dirty: false,
        }
    }

    /// Grid position this view occupies.
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Current pixel extent in grid coordinates.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub(crate) fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Whether the slot has a non-degenerate extent.
    pub fn is_visible(&self) -> bool {
        self.area.width > 1 && self.area.height > 1
    }

    /// Camera rendering this view.
    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    /// Mutable access to the camera.
    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.camera.as_mut()
    }

    /// Clear color for the view background.
    pub fn back_color(&self) -> Color {
        self.back_color
    }

    /// Set the background clear color.
    pub fn set_back_color(&mut self, color: Color) {
        self.back_color = color;
    }

    /// Cursor the host should show over this view.
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Set the cursor hint.
    pub fn set_cursor(&mut self, cursor: CursorHint) {
        self.cursor = cursor;
    }

    /// Request a redraw of this slot.
    pub fn invalidate(&mut self) {
        self.invalidations += 1;
        self.dirty = true;
    }

    /// Number of redraw requests received so far.
    pub fn invalidation_count(&self) -> u64 {
        self.invalidations
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear and return the pending-redraw flag. Called by the host after
    /// it repaints the slot.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Translate a grid point into this slot's local coordinates.
    pub fn to_local(&self, point: Point) -> Point {
        point.relative_to(self.area)
    }

    /// Whether a grid point falls inside this slot.
    pub fn contains(&self, point: Point) -> bool {
        point.is_inside(self.area)
    }
}
