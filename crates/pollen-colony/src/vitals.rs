//! Per-tick aging applied to every bee during the foraging pass.
//!
//! Each tick a bee grows one day older and one day further from its last
//! meal, then the mortality conditions in [`crate::death`] are checked.
//! All arithmetic uses checked operations.

use pollen_types::{Bee, DeathCause};
use pollen_world::Environment;

use crate::config::ColonyConfig;
use crate::death::check_death;
use crate::error::{ColonyError, overflow};

/// Result of applying one tick of aging to a bee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalTickResult {
    /// If the bee died this tick, the cause of death.
    pub death: Option<DeathCause>,
}

/// Age a bee by one day and check whether it died.
///
/// # Errors
///
/// Returns [`ColonyError::ArithmeticOverflow`] if a counter overflows.
pub fn apply_vital_tick(
    bee: &mut Bee,
    environment: &Environment,
    config: &ColonyConfig,
) -> Result<VitalTickResult, ColonyError> {
    bee.age = bee.age.checked_add(1).ok_or_else(|| overflow("bee age increment"))?;
    bee.days_since_food = bee
        .days_since_food
        .checked_add(1)
        .ok_or_else(|| overflow("days since food increment"))?;

    Ok(VitalTickResult {
        death: check_death(bee, environment, config),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pollen_types::{BeeId, Position};

    use super::*;

    fn newborn() -> Bee {
        Bee::new(BeeId::from_random(1), Position::new(0.0, 0.0), 0.0, None)
    }

    #[test]
    fn aging_increments_both_counters() {
        let mut bee = newborn();
        let result = apply_vital_tick(&mut bee, &Environment::new(20.0), &ColonyConfig::default())
            .unwrap();
        assert_eq!(bee.age, 1);
        assert_eq!(bee.days_since_food, 1);
        assert_eq!(result.death, None);
    }

    #[test]
    fn bee_aged_fifty_dies_regardless_of_conditions() {
        let mut bee = newborn();
        bee.age = 49;
        let result = apply_vital_tick(&mut bee, &Environment::new(20.0), &ColonyConfig::default())
            .unwrap();
        assert_eq!(bee.age, 50);
        assert_eq!(result.death, Some(DeathCause::OldAge));
    }

    #[test]
    fn starvation_after_threshold_days() {
        let config = ColonyConfig::with_starvation_threshold(2);
        let env = Environment::new(20.0);
        let mut bee = newborn();
        assert_eq!(apply_vital_tick(&mut bee, &env, &config).unwrap().death, None);
        assert_eq!(apply_vital_tick(&mut bee, &env, &config).unwrap().death, None);
        assert_eq!(
            apply_vital_tick(&mut bee, &env, &config).unwrap().death,
            Some(DeathCause::Starvation)
        );
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let mut bee = newborn();
        bee.age = u32::MAX;
        let result = apply_vital_tick(&mut bee, &Environment::new(20.0), &ColonyConfig::default());
        assert!(matches!(result, Err(ColonyError::ArithmeticOverflow { .. })));
    }
}
