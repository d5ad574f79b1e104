//! Mortality conditions for bees.
//!
//! A bee dies when any of these hold, checked in this order:
//! - Age exceeds the lifespan
//! - Temperature is below the cold limit
//! - Temperature is above the heat limit
//! - Days without food exceed the starvation threshold
//!
//! The first matching condition is reported as the cause.

use pollen_types::{Bee, DeathCause};
use pollen_world::Environment;

use crate::config::ColonyConfig;

/// Check whether a bee meets any death condition.
///
/// Returns `Some(cause)` if the bee is dead, `None` if alive. This only
/// inspects state; it does not mutate anything.
pub fn check_death(bee: &Bee, environment: &Environment, config: &ColonyConfig) -> Option<DeathCause> {
    if bee.age > config.lifespan {
        return Some(DeathCause::OldAge);
    }
    if let Some(cause) = environment.lethal_cause() {
        return Some(cause);
    }
    if bee.days_since_food > config.starvation_threshold {
        return Some(DeathCause::Starvation);
    }
    None
}

#[cfg(test)]
mod tests {
    use pollen_types::{BeeId, Position};

    use super::*;

    fn bee(age: u32, days_since_food: u32) -> Bee {
        let mut bee = Bee::new(BeeId::from_random(1), Position::new(0.0, 0.0), 0.0, None);
        bee.age = age;
        bee.days_since_food = days_since_food;
        bee
    }

    #[test]
    fn healthy_bee_survives() {
        let config = ColonyConfig::default();
        assert_eq!(check_death(&bee(49, 10), &Environment::new(20.0), &config), None);
    }

    #[test]
    fn old_age_beyond_lifespan() {
        let config = ColonyConfig::default();
        assert_eq!(
            check_death(&bee(50, 0), &Environment::new(20.0), &config),
            Some(DeathCause::OldAge)
        );
    }

    #[test]
    fn temperature_kills_regardless_of_age() {
        let config = ColonyConfig::default();
        assert_eq!(
            check_death(&bee(0, 0), &Environment::new(9.5), &config),
            Some(DeathCause::Cold)
        );
        assert_eq!(
            check_death(&bee(0, 0), &Environment::new(35.5), &config),
            Some(DeathCause::Heat)
        );
    }

    #[test]
    fn starvation_past_threshold() {
        let config = ColonyConfig::with_starvation_threshold(3);
        let env = Environment::new(20.0);
        assert_eq!(check_death(&bee(5, 3), &env, &config), None);
        assert_eq!(check_death(&bee(5, 4), &env, &config), Some(DeathCause::Starvation));
    }

    #[test]
    fn old_age_takes_priority() {
        let config = ColonyConfig::default();
        assert_eq!(
            check_death(&bee(60, 60), &Environment::new(5.0), &config),
            Some(DeathCause::OldAge)
        );
    }
}
