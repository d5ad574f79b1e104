//! Simulation clock.
//!
//! One tick is one simulated day. The counter starts at zero after setup
//! and is incremented as the last step of every tick, so it always equals
//! the number of completed ticks.

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,
}

/// Counter of completed ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock {
    /// Ticks completed since setup.
    tick: u64,
}

impl SimClock {
    /// Create a clock at tick zero.
    pub const fn new() -> Self {
        Self { tick: 0 }
    }

    /// Advance by one tick and return the new count.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if the counter is saturated.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.tick)
    }

    /// Return the number of completed ticks.
    pub const fn tick(&self) -> u64 {
        self.tick
    }
}
