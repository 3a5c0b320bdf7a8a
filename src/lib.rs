//! designview
//!
//! Controller for a quad-pane 3D editing surface: up to four camera views
//! arranged single, side-by-side or in a 2x2 grid, bound to the active edit
//! context and manipulator, and driven by a per-frame tick.
//!
//! The core ([`design_view`], [`layout`], [`context`], [`manipulator`],
//! [`timing`]) is single-threaded and host-agnostic. [`config`], [`logging`]
//! and [`preview`] form the shell used by the `designview` binary.

pub mod config;
pub mod context;
pub mod design_view;
pub mod input;
pub mod layout;
pub mod logging;
pub mod manipulator;
pub mod model;
pub mod preview;
pub mod timing;

pub use design_view::{DesignView, Editor, HostServices};
