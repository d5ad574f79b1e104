//! Enumeration types shared across the Pollen workspace.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four kinds of entity held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EntityKind {
    /// A forager bee.
    Bee,
    /// A nectar-bearing flower.
    Flower,
    /// A crop awaiting pollination and harvest.
    Crop,
    /// A hive receiving deposits.
    Hive,
}

/// The reason a bee was removed from the population.
///
/// When several conditions hold in the same tick the cause is reported in
/// declaration order: old age first, then cold, heat, and starvation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DeathCause {
    /// Age exceeded the lifespan.
    OldAge,
    /// Temperature fell below the survivable band.
    Cold,
    /// Temperature rose above the survivable band.
    Heat,
    /// Too many days passed without collecting or depositing nectar.
    Starvation,
}

impl core::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OldAge => write!(f, "old_age"),
            Self::Cold => write!(f, "cold"),
            Self::Heat => write!(f, "heat"),
            Self::Starvation => write!(f, "starvation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn death_cause_display_is_snake_case() {
        assert_eq!(DeathCause::OldAge.to_string(), "old_age");
        assert_eq!(DeathCause::Starvation.to_string(), "starvation");
    }
}
