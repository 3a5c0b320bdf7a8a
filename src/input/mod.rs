//! Host input capabilities: pointer position and control schemes.

pub mod control_scheme;
pub mod pointer;

pub use control_scheme::{
    ControlScheme, ControlSchemeFactory, InputScheme, StandardControlScheme, StandardSchemes,
};
pub use pointer::{PointerSource, PointerState};
