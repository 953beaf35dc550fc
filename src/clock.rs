//! Fixed-rate tick scheduling on top of a free-running redraw loop

use std::time::{Duration, Instant};

/// Fires at most once per interval and reports the real time since the
/// previous tick, so a late frame produces a longer `dt` rather than a
/// skipped tick.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl TickScheduler {
    pub fn new(rate_hz: f64) -> Self {
        Self::starting_at(rate_hz, Instant::now())
    }

    pub fn starting_at(rate_hz: f64, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / rate_hz),
            last_tick: now,
        }
    }

    /// Seconds since the previous tick if a tick is due at `now`
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return None;
        }

        self.last_tick = now;
        Some(elapsed.as_secs_f64())
    }
}
