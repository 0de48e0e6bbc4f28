//! Monotonic time source for request timing.

use std::time::Instant;

/// Nanosecond readings from a monotonic clock. Only differences between two
/// readings of the same clock are meaningful.
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> u64;
}

/// `Instant`-backed clock measuring from its own construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Whole milliseconds between two readings, floored. A reading that went
/// backwards yields 0.
pub fn elapsed_ms(start_ns: u64, end_ns: u64) -> i64 {
    let ms = end_ns.saturating_sub(start_ns) / 1_000_000;
    i64::try_from(ms).unwrap_or(i64::MAX)
}
