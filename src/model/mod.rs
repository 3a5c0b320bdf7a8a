//! Domain model types (pure).
//!
//! Plain data shared by the layout, timing and binding layers. Nothing in
//! here owns a capability object or touches the host.

pub mod control_scheme;
pub mod cursor;
pub mod error;
pub mod frame_time;
pub mod point;
pub mod snap;
pub mod view_mode;

// Re-export for convenience
pub use control_scheme::ControlSchemeKind;
pub use cursor::CursorHint;
pub use error::{AppError, ParseEnumError};
pub use frame_time::FrameTime;
pub use point::Point;
pub use snap::{SnapFromMode, SnapSettings, DEFAULT_SNAP_ANGLE_DEGREES};
pub use view_mode::{LayoutParameters, SlotId, ViewMode, DEFAULT_SPLITTER_THICKNESS};
