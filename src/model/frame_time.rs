//! Frame timing values.

/// Timing for a single tick.
///
/// Produced by [`FrameClock::now`](crate::timing::FrameClock::now); never
/// mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock was created.
    pub total_time: f64,
    /// Seconds since the previous tick.
    pub delta_time: f32,
}

impl FrameTime {
    /// Create a frame time from total and delta seconds.
    pub fn new(total_time: f64, delta_time: f32) -> Self {
        Self {
            total_time,
            delta_time,
        }
    }
}
