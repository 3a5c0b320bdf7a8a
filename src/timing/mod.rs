//! Per-frame timing.

pub mod frame_clock;

pub use frame_clock::{FrameClock, ManualSource, MonotonicSource, TimestampSource};
