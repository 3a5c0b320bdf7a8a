//! Monotonic frame clock.
//!
//! The clock turns raw ticks from a [`TimestampSource`] into [`FrameTime`]
//! values. It is read once per rendered frame.
//!
//! # Caller contract
//!
//! Every [`FrameClock::now`] call consumes the elapsed time since the previous
//! call. Reading the clock more than once per tick silently shrinks the delta
//! the next tick sees. The clock does not guard against this.

use crate::model::FrameTime;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic timestamps.
pub trait TimestampSource {
    /// Ticks per second. Read once when the clock is built.
    fn frequency(&self) -> u64;

    /// Current timestamp in ticks. Must never go backwards.
    fn timestamp(&self) -> u64;
}

/// [`Instant`]-backed source with nanosecond ticks.
///
/// `Instant` is monotonic, so wall-clock adjustments never skew frame times.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicSource {
    origin: Instant,
}

impl MonotonicSource {
    /// Source whose zero is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampSource for MonotonicSource {
    fn frequency(&self) -> u64 {
        1_000_000_000
    }

    fn timestamp(&self) -> u64 {
        // u64 nanoseconds cover ~584 years of uptime
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Hand-driven source for deterministic replay and tests.
///
/// Clones share the same counter, so a test can keep one handle and give
/// the other to the clock.
#[derive(Debug, Clone)]
pub struct ManualSource {
    frequency: u64,
    ticks: Rc<Cell<u64>>,
}

impl ManualSource {
    /// Create a source counting `frequency` ticks per second, starting at 0.
    pub fn new(frequency: u64) -> Self {
        Self {
            frequency: frequency.max(1),
            ticks: Rc::new(Cell::new(0)),
        }
    }

    /// Move time forward by `ticks`.
    pub fn advance(&self, ticks: u64) {
        self.ticks.set(self.ticks.get().saturating_add(ticks));
    }

    /// Move time forward by a number of seconds.
    pub fn advance_secs(&self, seconds: f64) {
        self.advance((seconds * self.frequency as f64).round() as u64);
    }
}

impl TimestampSource for ManualSource {
    fn frequency(&self) -> u64 {
        self.frequency
    }

    fn timestamp(&self) -> u64 {
        self.ticks.get()
    }
}

/// Accumulates total and delta frame time from a timestamp source.
pub struct FrameClock {
    source: Box<dyn TimestampSource>,
    frequency: f64,
    base_ticks: u64,
    last_ticks: u64,
}

impl FrameClock {
    /// Start a clock on `source`. Time zero is now.
    pub fn new(source: Box<dyn TimestampSource>) -> Self {
        let frequency = source.frequency().max(1) as f64;
        let base_ticks = source.timestamp();
        Self {
            source,
            frequency,
            base_ticks,
            last_ticks: base_ticks,
        }
    }

    /// Clock on the system monotonic source.
    pub fn monotonic() -> Self {
        Self::new(Box::new(MonotonicSource::new()))
    }

    /// Read the source and advance the clock.
    ///
    /// A source that steps backwards yields a zero delta rather than a
    /// negative one.
    pub fn now(&mut self) -> FrameTime {
        let cur = self.source.timestamp();
        let delta = cur.saturating_sub(self.last_ticks) as f64 / self.frequency;
        self.last_ticks = cur;
        let total = self.last_ticks.saturating_sub(self.base_ticks) as f64 / self.frequency;
        FrameTime::new(total, delta as f32)
    }
}

impl std::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameClock")
            .field("frequency", &self.frequency)
            .field("base_ticks", &self.base_ticks)
            .field("last_ticks", &self.last_ticks)
            .finish()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::monotonic()
    }
}
