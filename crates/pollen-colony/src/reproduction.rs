//! Resource-gated batch reproduction.
//!
//! Once per tick, after plants have grown, the colony converts pooled
//! resources into new bees: if the pool holds at least one brood's cost,
//! a fixed-size brood hatches at random positions and exactly that cost is
//! deducted. Surplus never buys a second brood in the same tick. The cost is
//! only taken once the whole brood is in the registry; a failed hatch
//! removes the newborns already placed and leaves the pool untouched.

use pollen_types::BeeId;
use pollen_world::{Field, Registry};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::ColonyConfig;
use crate::error::{ColonyError, overflow};

/// Check whether the pool can pay for a brood.
pub fn can_reproduce(pooled: Decimal, config: &ColonyConfig) -> bool {
    pooled >= config.brood_cost
}

/// Hatch one brood if the pool can pay for it.
///
/// Each newborn is placed at a random position and homed to the hive
/// nearest to it. Returns the identifiers of the new bees, or an empty
/// vector when the pool is short.
///
/// # Errors
///
/// Returns [`ColonyError::ArithmeticOverflow`] if the deduction fails, or
/// [`ColonyError::World`] if the registry rejects a newborn. On either
/// error neither the registry nor the pool is changed.
pub fn reproduce(
    registry: &mut Registry,
    pooled: &mut Decimal,
    field: &Field,
    config: &ColonyConfig,
    rng: &mut impl Rng,
) -> Result<Vec<BeeId>, ColonyError> {
    if !can_reproduce(*pooled, config) {
        return Ok(Vec::new());
    }

    let remaining = pooled
        .checked_sub(config.brood_cost)
        .ok_or_else(|| overflow("brood cost deduction"))?;

    let mut born = Vec::new();
    for _ in 0..config.brood_size {
        match registry.spawn_bee(field, rng) {
            Ok(id) => born.push(id),
            Err(e) => {
                for id in &born {
                    registry.remove_bee(*id);
                }
                warn!(error = %e, rolled_back = born.len(), "Brood failed to hatch");
                return Err(e.into());
            }
        }
    }

    *pooled = remaining;
    info!(
        births = born.len(),
        cost = %config.brood_cost,
        pooled = %remaining,
        "Brood hatched"
    );
    Ok(born)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pollen_types::{Bee, EntityKind, Position};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    use super::*;

    fn setup() -> (Registry, Field, StdRng) {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut registry = Registry::new();
        registry.spawn_hive(&field, &mut rng).unwrap();
        (registry, field, rng)
    }

    #[test]
    fn brood_costs_exactly_twenty() {
        let (mut registry, field, mut rng) = setup();
        let mut pooled = dec!(25);

        let born = reproduce(&mut registry, &mut pooled, &field, &ColonyConfig::default(), &mut rng)
            .unwrap();

        assert_eq!(born.len(), 20);
        assert_eq!(pooled, dec!(5));
        assert_eq!(registry.count(EntityKind::Bee), 20);
    }

    #[test]
    fn one_brood_per_call_even_with_surplus() {
        let (mut registry, field, mut rng) = setup();
        let mut pooled = dec!(45);

        let born = reproduce(&mut registry, &mut pooled, &field, &ColonyConfig::default(), &mut rng)
            .unwrap();

        assert_eq!(born.len(), 20);
        assert_eq!(pooled, dec!(25));
    }

    #[test]
    fn short_pool_hatches_nothing() {
        let (mut registry, field, mut rng) = setup();
        let mut pooled = dec!(19.9);

        let born = reproduce(&mut registry, &mut pooled, &field, &ColonyConfig::default(), &mut rng)
            .unwrap();

        assert!(born.is_empty());
        assert_eq!(pooled, dec!(19.9));
    }

    #[test]
    fn failed_hatch_keeps_pool_and_registry() {
        let (mut registry, field, mut rng) = setup();
        // Replay the draws on a copy to learn the fifth newborn's id, then
        // occupy that id so the fifth spawn clashes.
        let mut replay = rng.clone();
        let mut scratch = Registry::new();
        let mut clashing = scratch.spawn_bee(&field, &mut replay).unwrap();
        for _ in 1..5 {
            clashing = scratch.spawn_bee(&field, &mut replay).unwrap();
        }
        registry
            .insert_bee(Bee::new(clashing, Position::new(1.0, 1.0), 0.0, None))
            .unwrap();
        let mut pooled = dec!(25);

        let result = reproduce(&mut registry, &mut pooled, &field, &ColonyConfig::default(), &mut rng);

        assert!(matches!(result, Err(ColonyError::World { .. })));
        assert_eq!(pooled, dec!(25));
        assert_eq!(registry.count(EntityKind::Bee), 1);
        assert_eq!(registry.bees().first().map(|b| b.id), Some(clashing));
    }

    #[test]
    fn newborns_are_homed_and_zeroed() {
        let (mut registry, field, mut rng) = setup();
        let hive = registry.hives().first().map(|h| h.id);
        let mut pooled = dec!(20);

        reproduce(&mut registry, &mut pooled, &field, &ColonyConfig::default(), &mut rng).unwrap();

        assert_eq!(pooled, Decimal::ZERO);
        for bee in registry.bees() {
            assert_eq!(bee.home_hive, hive);
            assert_eq!(bee.age, 0);
            assert_eq!(bee.carrying_nectar, Decimal::ZERO);
            assert!(!bee.full);
            assert!(field.contains(bee.position));
        }
    }
}
