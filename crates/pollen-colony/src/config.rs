//! Tunable parameters for bee behaviour.
//!
//! [`ColonyConfig`] bundles every constant the foraging, return, aging, and
//! reproduction rules read, so the tick cycle and tests can override them.
//! Only `starvation_threshold` is exposed as a user-facing input; the rest
//! hold the model's fixed values by default.

use rust_decimal::Decimal;

/// Configuration for per-bee mechanics applied each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ColonyConfig {
    /// Bees older than this many days die (default: 49).
    pub lifespan: u32,

    /// Bees die once `days_since_food` exceeds this (default: 10).
    pub starvation_threshold: u32,

    /// Load at which a bee turns for home (default: 10).
    pub full_threshold: Decimal,

    /// Most nectar taken from a flower in one visit (default: 3).
    pub max_collect: Decimal,

    /// Bees spawned per reproduction batch (default: 20).
    pub brood_size: u32,

    /// Pooled resources consumed per reproduction batch (default: 20).
    pub brood_cost: Decimal,

    /// Distance flown per tick (default: 1.0).
    pub flight_step: f64,

    /// Upper bound of each of the two draws making up a random turn
    /// (default: 50). The turn is `a - b` degrees, so it lies in
    /// `[-max_turn, max_turn]`.
    pub max_turn: u32,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            lifespan: 49,
            starvation_threshold: 10,
            full_threshold: Decimal::TEN,
            max_collect: Decimal::new(3, 0),
            brood_size: 20,
            brood_cost: Decimal::new(20, 0),
            flight_step: 1.0,
            max_turn: 50,
        }
    }
}

impl ColonyConfig {
    /// Default config with a custom starvation threshold.
    pub fn with_starvation_threshold(starvation_threshold: u32) -> Self {
        Self {
            starvation_threshold,
            ..Self::default()
        }
    }
}
