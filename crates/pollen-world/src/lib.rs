//! Field geometry, environment, entities, and plant life for the Pollen
//! simulation.
//!
//! This crate models everything a bee moves through: a wrapping 2D field,
//! the temperature random walk, the registry that owns every agent, and the
//! regrowth of flowers and growth of crops.
//!
//! # Modules
//!
//! - [`environment`] -- Temperature random walk and the regrowth and
//!   survival bands.
//! - [`error`] -- Error types for world operations.
//! - [`field`] -- Toroidal geometry: wrapping, shortest distances, headings,
//!   unit-cell co-location, and nearest-neighbour queries.
//! - [`flora`] -- Flower nectar regrowth, crop growth, and harvest.
//! - [`registry`] -- [`Registry`] owns bees, flowers, crops, and hives and
//!   supports spawn, lookup, and removal.

pub mod environment;
pub mod error;
pub mod field;
pub mod flora;
pub mod registry;

// Re-export primary types at crate root.
pub use environment::{
    COLD_LIMIT, Environment, HEAT_LIMIT, REGROWTH_MAX_TEMPERATURE, REGROWTH_MIN_TEMPERATURE,
    TEMPERATURE_STEP,
};
pub use error::WorldError;
pub use field::{DEFAULT_FIELD_SIZE, Field};
pub use flora::{
    GROWTH_PER_TICK, HARVEST_GROWTH, MAX_NECTAR, NECTAR_REGROWTH, POLLINATION_GROWTH_BONUS,
    grow_crops, mean_nectar, regenerate_flowers,
};
pub use registry::{INITIAL_NECTAR_RANGE, Registry, RegistryMut};
