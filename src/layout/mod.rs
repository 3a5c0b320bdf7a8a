//! Quad-pane view grid.
//!
//! [`QuadLayout`] owns the four [`ViewSlot`]s and derives their pixel extents
//! from a [`LayoutParameters`](crate::model::LayoutParameters) snapshot and
//! the host-supplied grid area. Visibility is decided from that snapshot,
//! never from live widget geometry.

pub mod quad;
pub mod slot;

pub use quad::{slot_areas, QuadLayout};
pub use slot::{Camera, ClipCamera, ViewSlot, DEFAULT_BACK_COLOR, DEFAULT_CAMERA_FAR_Z};
