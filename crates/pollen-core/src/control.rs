//! Shared run-control state for the simulation loop.
//!
//! [`RunControl`] is shared between the run loop and whatever stops it
//! (the binary's Ctrl-C handler, a test). The stop flag is atomic so the
//! loop reads it without locking; pacing and the tick bound are fixed at
//! construction.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

/// Reason why the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationEndReason {
    /// Reached the configured `max_ticks` limit.
    MaxTicksReached,
    /// A stop was requested.
    StopRequested,
    /// Every bee is dead.
    Extinction,
}

impl core::fmt::Display for SimulationEndReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MaxTicksReached => write!(f, "max_ticks_reached"),
            Self::StopRequested => write!(f, "stop_requested"),
            Self::Extinction => write!(f, "extinction"),
        }
    }
}

/// Shared control state for the run loop.
#[derive(Debug)]
pub struct RunControl {
    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Pause between ticks in milliseconds.
    tick_interval_ms: u64,

    /// Maximum number of ticks (0 = unlimited).
    max_ticks: u64,
}

impl RunControl {
    /// Create control state with the given pacing and tick bound.
    pub const fn new(tick_interval_ms: u64, max_ticks: u64) -> Self {
        Self {
            stop_requested: AtomicBool::new(false),
            tick_interval_ms,
            max_ticks,
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop before the next tick.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------------
    // Pacing
    // -----------------------------------------------------------------------

    /// Get the tick interval in milliseconds.
    pub const fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Check whether the tick limit has been reached.
    ///
    /// Returns `true` if `max_ticks > 0` and `current_tick >= max_ticks`.
    pub const fn tick_limit_reached(&self, current_tick: u64) -> bool {
        self.max_ticks > 0 && current_tick >= self.max_ticks
    }

    /// Get the configured max ticks.
    pub const fn max_ticks(&self) -> u64 {
        self.max_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_flag_latches() {
        let control = RunControl::new(0, 0);
        assert!(!control.is_stop_requested());
        control.request_stop();
        assert!(control.is_stop_requested());
    }

    #[test]
    fn zero_max_ticks_is_unbounded() {
        let control = RunControl::new(0, 0);
        assert!(!control.tick_limit_reached(u64::MAX));
        let bounded = RunControl::new(0, 5);
        assert!(!bounded.tick_limit_reached(4));
        assert!(bounded.tick_limit_reached(5));
    }

    #[test]
    fn interval_is_fixed_at_construction() {
        let control = RunControl::new(250, 0);
        assert_eq!(control.tick_interval_ms(), 250);
    }

    #[test]
    fn end_reason_display() {
        assert_eq!(SimulationEndReason::Extinction.to_string(), "extinction");
        assert_eq!(SimulationEndReason::StopRequested.to_string(), "stop_requested");
    }
}
