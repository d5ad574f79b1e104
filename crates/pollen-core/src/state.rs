//! The complete mutable state of one simulation run.
//!
//! [`SimulationState`] bundles the world, the agents, the global counters,
//! and the seeded generator. There is no other state: two states built
//! from the same configuration are identical, identifiers included, and
//! stay identical tick for tick.

use pollen_colony::ColonyConfig;
use pollen_types::EntityKind;
use pollen_world::{Environment, Field, Registry, WorldError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::info;

use crate::clock::SimClock;
use crate::config::{ConfigError, SimulationConfig};

/// Errors that can occur while building a fresh state.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The configuration failed validation.
    #[error("invalid configuration: {source}")]
    Config {
        /// The underlying validation error.
        #[from]
        source: ConfigError,
    },

    /// Populating the registry failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

/// The mutable simulation state passed through the tick cycle.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Completed-tick counter.
    pub clock: SimClock,
    /// Field geometry.
    pub field: Field,
    /// Temperature process.
    pub environment: Environment,
    /// Every bee, flower, crop, and hive.
    pub registry: Registry,
    /// Per-bee rule parameters.
    pub colony_config: ColonyConfig,
    /// Pooled resources: deposits minus brood costs.
    pub hive_resources: Decimal,
    /// Crops harvested since setup.
    pub crop_yield: u64,
    /// Pollinated flowers, recomputed each tick.
    pub pollination_success: u32,
    /// The run's only source of randomness.
    pub rng: StdRng,
}

impl SimulationState {
    /// Build a fresh state from a validated configuration.
    ///
    /// Hives are placed first so every initial bee can be homed to its
    /// nearest hive; flowers, crops, and bees follow.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] if the configuration is out of range
    /// or [`SetupError::World`] if the registry rejects an entity.
    pub fn setup(config: &SimulationConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let field = Field::new(config.world.width, config.world.height)?;
        let mut rng = StdRng::seed_from_u64(config.world.seed);
        let mut registry = Registry::new();

        let population = &config.population;
        for _ in 0..population.initial_hives {
            registry.spawn_hive(&field, &mut rng)?;
        }
        for _ in 0..population.initial_flowers {
            registry.spawn_flower(&field, &mut rng)?;
        }
        for _ in 0..population.initial_crops {
            registry.spawn_crop(&field, &mut rng)?;
        }
        for _ in 0..population.initial_bees {
            registry.spawn_bee(&field, &mut rng)?;
        }

        info!(
            seed = config.world.seed,
            width = field.width(),
            height = field.height(),
            bees = registry.count(EntityKind::Bee),
            flowers = registry.count(EntityKind::Flower),
            crops = registry.count(EntityKind::Crop),
            hives = registry.count(EntityKind::Hive),
            temperature = config.environment.initial_temperature,
            "Simulation set up"
        );

        Ok(Self {
            clock: SimClock::new(),
            field,
            environment: Environment::new(config.environment.initial_temperature),
            registry,
            colony_config: config.colony_config(),
            hive_resources: Decimal::ZERO,
            crop_yield: 0,
            pollination_success: 0,
            rng,
        })
    }

    /// Number of live bees.
    pub fn bees_alive(&self) -> usize {
        self.registry.count(EntityKind::Bee)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn setup_spawns_configured_counts() {
        let config = SimulationConfig::default();
        let state = SimulationState::setup(&config).unwrap();

        assert_eq!(state.registry.count(EntityKind::Bee), 50);
        assert_eq!(state.registry.count(EntityKind::Flower), 100);
        assert_eq!(state.registry.count(EntityKind::Crop), 20);
        assert_eq!(state.registry.count(EntityKind::Hive), 1);
        assert_eq!(state.clock.tick(), 0);
        assert_eq!(state.hive_resources, Decimal::ZERO);
        assert_eq!(state.crop_yield, 0);
    }

    #[test]
    fn initial_bees_are_homed_and_zeroed() {
        let state = SimulationState::setup(&SimulationConfig::default()).unwrap();
        let hive = state.registry.hives().first().map(|h| h.id);
        for bee in state.registry.bees() {
            assert_eq!(bee.home_hive, hive);
            assert_eq!(bee.age, 0);
            assert_eq!(bee.days_since_food, 0);
            assert!(!bee.full);
            assert!(state.field.contains(bee.position));
        }
    }

    #[test]
    fn setup_is_idempotent() {
        let config = SimulationConfig::default();
        let a = SimulationState::setup(&config).unwrap();
        let b = SimulationState::setup(&config).unwrap();
        assert_eq!(a.registry, b.registry);
    }

    #[test]
    fn different_seeds_differ() {
        let mut config = SimulationConfig::default();
        let a = SimulationState::setup(&config).unwrap();
        config.world.seed = 43;
        let b = SimulationState::setup(&config).unwrap();
        assert_ne!(a.registry, b.registry);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SimulationConfig::default();
        config.population.initial_hives = 0;
        assert!(matches!(
            SimulationState::setup(&config),
            Err(SetupError::Config { .. })
        ));
    }
}
