//! Cursor hint shown over the active view.

/// Cursor the host should display over the active view.
///
/// Derived from the last manipulator assignment: a manipulator whose pick
/// hit something under the pointer asks for the drag cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    /// Regular arrow cursor.
    #[default]
    Default,
    /// Four-way move cursor; the manipulator is ready to drag.
    Drag,
}
