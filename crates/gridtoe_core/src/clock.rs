//! Match clock: turns elapsed wall-clock time into per-tick credits.

use std::time::{Duration, Instant};
use tracing::{instrument, trace};

/// Tick period a driver should use unless configured otherwise.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Reference-point clock driven by an external scheduler.
///
/// The clock never reads the wall clock itself. A driver calls
/// [`MatchClock::tick`] with the current instant, and receives the time
/// elapsed since the previous tick (or since [`MatchClock::start`]). The
/// reference point then advances to that instant, so every interval is
/// handed out exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchClock {
    reference: Option<Instant>,
}

impl MatchClock {
    /// Creates a stopped clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock already running from `now`.
    pub fn started(now: Instant) -> Self {
        Self {
            reference: Some(now),
        }
    }

    /// Starts (or restarts) the clock with `now` as the reference point.
    #[instrument(skip(self))]
    pub fn start(&mut self, now: Instant) {
        self.reference = Some(now);
    }

    /// Stops the clock. Later ticks credit nothing until the next start.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        self.reference = None;
    }

    /// Returns true while the clock is running.
    pub fn is_running(&self) -> bool {
        self.reference.is_some()
    }

    /// Returns the time elapsed since the last reference point and moves
    /// the reference to `now`.
    ///
    /// Returns `None` while stopped. An instant earlier than the reference
    /// yields a zero delta.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let reference = self.reference.as_mut()?;
        let delta = now.saturating_duration_since(*reference);
        *reference = now.max(*reference);
        trace!(delta_ms = delta.as_millis() as u64, "Clock tick");
        Some(delta)
    }
}
