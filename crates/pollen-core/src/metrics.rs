//! Derived counters and the observable snapshot.
//!
//! `pollination_success` is recomputed from scratch every tick rather than
//! tracked incrementally, so it always matches the flowers' flags.

use pollen_types::{EntityKind, Flower, Observables};
use pollen_world::mean_nectar;

use crate::state::SimulationState;
use crate::tick::{TickError, count};

/// Count pollinated flowers.
///
/// # Errors
///
/// Returns [`TickError::ArithmeticOverflow`] if the count exceeds `u32`.
pub fn pollination_success(flowers: &[Flower]) -> Result<u32, TickError> {
    let pollinated = flowers.iter().filter(|flower| flower.pollinated).count();
    count(pollinated, "pollination success")
}

/// Recompute derived counters on the state.
///
/// # Errors
///
/// Returns [`TickError::ArithmeticOverflow`] if a counter exceeds its type.
pub fn recompute(state: &mut SimulationState) -> Result<(), TickError> {
    state.pollination_success = pollination_success(state.registry.flowers())?;
    Ok(())
}

/// Build the observable snapshot of the current state.
///
/// # Errors
///
/// Returns [`TickError::ArithmeticOverflow`] if an entity count exceeds
/// `u32`.
pub fn observe(state: &SimulationState) -> Result<Observables, TickError> {
    let registry = &state.registry;
    Ok(Observables {
        tick: state.clock.tick(),
        bees: count(registry.count(EntityKind::Bee), "bee count")?,
        flowers: count(registry.count(EntityKind::Flower), "flower count")?,
        crops: count(registry.count(EntityKind::Crop), "crop count")?,
        hives: count(registry.count(EntityKind::Hive), "hive count")?,
        hive_resources: state.hive_resources,
        pollination_success: state.pollination_success,
        crop_yield: state.crop_yield,
        temperature: state.environment.temperature(),
        mean_flower_nectar: mean_nectar(registry.flowers()),
    })
}
