//! Host-global pointer state.

use crate::model::Point;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::cell::Cell;
use std::rc::Rc;

/// Where the pointer currently is, in grid (screen) coordinates.
pub trait PointerSource {
    /// Last known pointer position.
    fn screen_position(&self) -> Point;
}

/// Pointer tracker fed from terminal mouse events.
///
/// Clones share state: the host keeps one handle to feed events while the
/// design view reads another.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Rc<Cell<Point>>,
    pressed: Rc<Cell<Option<MouseButton>>>,
}

impl PointerState {
    /// Tracker at the origin with no button held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mouse event.
    pub fn observe(&self, event: &MouseEvent) {
        self.position.set(Point::new(
            i32::from(event.column),
            i32::from(event.row),
        ));
        match event.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                self.pressed.set(Some(button));
            }
            MouseEventKind::Up(_) => self.pressed.set(None),
            _ => {}
        }
    }

    /// Move the pointer without an event (warping, tests).
    pub fn set_position(&self, point: Point) {
        self.position.set(point);
    }

    /// Button held down, if any.
    pub fn pressed(&self) -> Option<MouseButton> {
        self.pressed.get()
    }
}

impl PointerSource for PointerState {
    fn screen_position(&self) -> Point {
        self.position.get()
    }
}
