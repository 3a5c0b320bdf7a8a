//! Pointer coordinates.

use ratatui::layout::{Position, Rect};

/// A pixel position. Signed because view-local coordinates of a pointer
/// outside the view are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Point at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate a screen point into the coordinate space of `area`.
    pub fn relative_to(self, area: Rect) -> Point {
        Point::new(self.x - i32::from(area.x), self.y - i32::from(area.y))
    }

    /// Whether the point falls inside `area`.
    pub fn is_inside(self, area: Rect) -> bool {
        let left = i32::from(area.x);
        let top = i32::from(area.y);
        self.x >= left
            && self.x < left + i32::from(area.width)
            && self.y >= top
            && self.y < top + i32::from(area.height)
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        Point::new(i32::from(pos.x), i32::from(pos.y))
    }
}
