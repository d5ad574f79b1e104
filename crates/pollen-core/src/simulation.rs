//! The host-facing simulation handle.
//!
//! [`Simulation`] pairs a configuration with the state built from it and
//! exposes the operations a host drives: `setup`, `step`, live parameter
//! changes, and read-only observables.

use pollen_types::Observables;
use tracing::info;

use crate::config::{ConfigError, SimulationConfig, check_starvation_threshold};
use crate::metrics;
use crate::state::{SetupError, SimulationState};
use crate::tick::{self, TickError, TickSummary};

/// A configured simulation run.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The configuration the state was built from.
    config: SimulationConfig,
    /// The live state.
    state: SimulationState,
}

impl Simulation {
    /// Validate `config` and build a fresh run from it.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the configuration is out of range or the
    /// initial population cannot be placed.
    pub fn setup(config: SimulationConfig) -> Result<Self, SetupError> {
        let state = SimulationState::setup(&config)?;
        Ok(Self { config, state })
    }

    /// Discard all state and rebuild it from the current configuration.
    ///
    /// Resetting twice yields the same state as resetting once.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] under the same conditions as [`Self::setup`].
    pub fn reset(&mut self) -> Result<(), SetupError> {
        self.state = SimulationState::setup(&self.config)?;
        Ok(())
    }

    /// Advance exactly one tick.
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if the tick cannot complete.
    pub fn step(&mut self) -> Result<TickSummary, TickError> {
        tick::run_tick(&mut self.state)
    }

    /// Change the starvation threshold for the rest of the run.
    ///
    /// The change also applies to later resets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] outside `[1, 20]`; the threshold
    /// is left unchanged.
    pub fn set_starvation_threshold(&mut self, threshold: u32) -> Result<(), ConfigError> {
        check_starvation_threshold(threshold)?;
        self.config.colony.starvation_threshold = threshold;
        self.state.colony_config.starvation_threshold = threshold;
        info!(threshold, "Starvation threshold changed");
        Ok(())
    }

    /// Current observable snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::ArithmeticOverflow`] if an entity count exceeds
    /// `u32`.
    pub fn observables(&self) -> Result<Observables, TickError> {
        metrics::observe(&self.state)
    }

    /// Read-only access to the state.
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access to the state, for scenario setup and tests.
    pub const fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}
