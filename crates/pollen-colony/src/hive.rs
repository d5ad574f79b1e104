//! Returning to the hive and depositing nectar.
//!
//! Runs for each full bee after every bee has foraged, so a deposit never
//! interleaves with another bee's foraging. A bee whose home hive is unset
//! or no longer exists is rehomed to the nearest hive first. With no hives
//! at all the bee stays full and does nothing.

use pollen_types::{Bee, BeeId, Hive, HiveId};
use pollen_world::Field;
use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{ColonyError, overflow};

/// A completed nectar deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    /// The depositing bee.
    pub bee: BeeId,
    /// The receiving hive.
    pub hive: HiveId,
    /// Nectar added to the hive's stores and the pooled resources.
    pub amount: Decimal,
}

/// Outcome of a return attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The bee is not full, so it stays in the field.
    NotFull,
    /// No hive exists to return to.
    NoHive,
    /// The bee flew home and deposited its load.
    Deposited(Deposit),
}

/// Resolve the bee's home hive, rehoming it to the nearest hive when the
/// reference is unset or stale.
///
/// Returns the index of the home hive in `hives`, or `None` when there are
/// no hives.
pub fn resolve_home_hive(bee: &mut Bee, hives: &[Hive], field: &Field) -> Option<usize> {
    if let Some(home) = bee.home_hive
        && let Some(index) = hives.iter().position(|hive| hive.id == home)
    {
        return Some(index);
    }

    let index = field.nearest_index(bee.position, hives, |hive| hive.position)?;
    bee.home_hive = hives.get(index).map(|hive| hive.id);
    Some(index)
}

/// Fly a full bee home and deposit its load.
///
/// The hive's `stores` and the pooled resources grow by the same amount.
/// The bee ends at the hive, empty, fed, and no longer full.
///
/// # Errors
///
/// Returns [`ColonyError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn return_to_hive(
    bee: &mut Bee,
    hives: &mut [Hive],
    pooled: &mut Decimal,
    field: &Field,
) -> Result<ReturnOutcome, ColonyError> {
    if !bee.full {
        return Ok(ReturnOutcome::NotFull);
    }

    let resolved = resolve_home_hive(bee, hives, field);
    let Some(hive) = resolved.and_then(|index| hives.get_mut(index)) else {
        trace!(bee_id = %bee.id, "Full bee has no hive to return to");
        return Ok(ReturnOutcome::NoHive);
    };

    let amount = bee.carrying_nectar;
    let stores = hive
        .stores
        .checked_add(amount)
        .ok_or_else(|| overflow("hive stores deposit"))?;
    let pooled_after = pooled
        .checked_add(amount)
        .ok_or_else(|| overflow("pooled resources deposit"))?;

    hive.stores = stores;
    *pooled = pooled_after;

    bee.position = hive.position;
    bee.carrying_nectar = Decimal::ZERO;
    bee.days_since_food = 0;
    bee.full = false;

    Ok(ReturnOutcome::Deposited(Deposit {
        bee: bee.id,
        hive: hive.id,
        amount,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pollen_types::Position;
    use rust_decimal_macros::dec;

    use super::*;

    fn full_bee(home: Option<HiveId>) -> Bee {
        let mut bee = Bee::new(BeeId::from_random(1), Position::new(10.0, 10.0), 0.0, home);
        bee.carrying_nectar = dec!(10);
        bee.full = true;
        bee.days_since_food = 2;
        bee
    }

    fn hive_at(seed: u128, x: f64, y: f64) -> Hive {
        Hive::new(HiveId::from_random(seed), Position::new(x, y))
    }

    #[test]
    fn full_bee_deposits_into_home_hive() {
        let field = Field::default();
        let mut hives = vec![hive_at(1, 3.0, 3.0)];
        let home = hives.first().map(|h| h.id);
        let mut bee = full_bee(home);
        let mut pooled = Decimal::ZERO;

        let outcome = return_to_hive(&mut bee, &mut hives, &mut pooled, &field).unwrap();

        let hive = hives.first().unwrap();
        assert_eq!(hive.stores, dec!(10));
        assert_eq!(pooled, dec!(10));
        assert_eq!(bee.carrying_nectar, Decimal::ZERO);
        assert!(!bee.full);
        assert_eq!(bee.days_since_food, 0);
        assert_eq!(bee.position, hive.position);
        assert!(matches!(outcome, ReturnOutcome::Deposited(d) if d.amount == dec!(10)));
    }

    #[test]
    fn deposit_goes_to_home_not_nearest() {
        let field = Field::default();
        let mut hives = vec![hive_at(1, 10.5, 10.5), hive_at(2, 25.0, 25.0)];
        let far = hives.get(1).map(|h| h.id);
        let mut bee = full_bee(far);
        let mut pooled = dec!(4);

        return_to_hive(&mut bee, &mut hives, &mut pooled, &field).unwrap();

        assert_eq!(hives.first().unwrap().stores, Decimal::ZERO);
        assert_eq!(hives.get(1).unwrap().stores, dec!(10));
        assert_eq!(pooled, dec!(14));
    }

    #[test]
    fn stale_home_is_rehomed_to_nearest() {
        let field = Field::default();
        let mut hives = vec![hive_at(1, 25.0, 25.0), hive_at(2, 11.0, 11.0)];
        let mut bee = full_bee(Some(HiveId::from_random(99)));
        let mut pooled = Decimal::ZERO;

        return_to_hive(&mut bee, &mut hives, &mut pooled, &field).unwrap();

        let nearest = hives.get(1).unwrap();
        assert_eq!(bee.home_hive, Some(nearest.id));
        assert_eq!(nearest.stores, dec!(10));
    }

    #[test]
    fn full_bee_without_hives_stays_stuck() {
        let field = Field::default();
        let mut bee = full_bee(None);
        let mut pooled = Decimal::ZERO;

        let outcome = return_to_hive(&mut bee, &mut [], &mut pooled, &field).unwrap();

        assert_eq!(outcome, ReturnOutcome::NoHive);
        assert!(bee.full);
        assert_eq!(bee.carrying_nectar, dec!(10));
        assert_eq!(pooled, Decimal::ZERO);
    }

    #[test]
    fn bee_that_is_not_full_is_ignored() {
        let field = Field::default();
        let mut hives = vec![hive_at(1, 3.0, 3.0)];
        let mut bee = full_bee(None);
        bee.full = false;
        let mut pooled = Decimal::ZERO;

        let outcome = return_to_hive(&mut bee, &mut hives, &mut pooled, &field).unwrap();

        assert_eq!(outcome, ReturnOutcome::NotFull);
        assert_eq!(hives.first().unwrap().stores, Decimal::ZERO);
        assert!(bee.home_hive.is_none());
    }
}
