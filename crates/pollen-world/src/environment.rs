//! Environmental temperature process for the Pollen simulation.
//!
//! Temperature is a single scalar that performs an unbounded random walk:
//! once per tick, before any agent acts, it moves by a uniform draw from
//! `[-0.25, 0.25)`. No clamp is applied, so a long run can drift out of
//! the survivable band and wipe out the colony.
//!
//! # Temperature bands
//!
//! | Band             | Range (inclusive) | Effect                        |
//! |------------------|-------------------|-------------------------------|
//! | Regrowth         | 15 -- 30          | Pollinated flowers regrow     |
//! | Survivable       | 10 -- 35          | Outside this, every bee dies  |
//!
//! # Determinism
//!
//! The walk draws from the caller's generator, so a seeded generator
//! replays the same temperature sequence.

use pollen_types::DeathCause;
use rand::Rng;

/// Largest per-tick temperature change in either direction.
pub const TEMPERATURE_STEP: f64 = 0.25;

/// Lowest temperature at which pollinated flowers regrow nectar.
pub const REGROWTH_MIN_TEMPERATURE: f64 = 15.0;

/// Highest temperature at which pollinated flowers regrow nectar.
pub const REGROWTH_MAX_TEMPERATURE: f64 = 30.0;

/// Below this temperature every bee dies of cold.
pub const COLD_LIMIT: f64 = 10.0;

/// Above this temperature every bee dies of heat.
pub const HEAT_LIMIT: f64 = 35.0;

/// The environment's mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Current temperature.
    temperature: f64,
}

impl Environment {
    /// Create an environment starting at `temperature`.
    pub const fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    /// Advance the random walk by one tick and return the new temperature.
    pub fn advance(&mut self, rng: &mut impl Rng) -> f64 {
        let delta = rng.random_range(-TEMPERATURE_STEP..TEMPERATURE_STEP);
        self.temperature += delta;
        self.temperature
    }

    /// Return the current temperature.
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Override the temperature (useful for tests and scenario setup).
    pub const fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Whether pollinated flowers regrow nectar at the current temperature.
    pub fn supports_regrowth(&self) -> bool {
        (REGROWTH_MIN_TEMPERATURE..=REGROWTH_MAX_TEMPERATURE).contains(&self.temperature)
    }

    /// The temperature-driven death cause, if the current temperature is
    /// outside the survivable band.
    pub fn lethal_cause(&self) -> Option<DeathCause> {
        if self.temperature < COLD_LIMIT {
            Some(DeathCause::Cold)
        } else if self.temperature > HEAT_LIMIT {
            Some(DeathCause::Heat)
        } else {
            None
        }
    }
}
