//! Flower nectar regrowth and crop growth with harvest.
//!
//! Both run once per tick after the bees have moved and deposited:
//!
//! - A pollinated flower below [`MAX_NECTAR`] regains [`NECTAR_REGROWTH`]
//!   (capped) while the temperature is inside the regrowth band.
//!   Unpollinated flowers never regrow.
//! - A pollinated crop below [`HARVEST_GROWTH`] accrues [`GROWTH_PER_TICK`].
//!   Any crop at or above [`HARVEST_GROWTH`] is then harvested and removed.

use pollen_types::{Crop, CropId, Flower};
use rust_decimal::Decimal;
use tracing::debug;

use crate::environment::Environment;
use crate::error::WorldError;

/// Ceiling on a flower's nectar.
pub const MAX_NECTAR: Decimal = Decimal::TEN;

/// Nectar a pollinated flower regains per tick in the regrowth band.
pub const NECTAR_REGROWTH: Decimal = Decimal::ONE;

/// Growth at which a crop is harvested.
pub const HARVEST_GROWTH: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Growth a pollinated crop accrues each tick.
pub const GROWTH_PER_TICK: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Growth granted the moment a crop is first pollinated.
pub const POLLINATION_GROWTH_BONUS: Decimal = Decimal::ONE;

/// Regrow nectar on pollinated flowers.
///
/// Returns the number of flowers that gained nectar. Nothing regrows
/// outside the regrowth band.
///
/// # Errors
///
/// Returns [`WorldError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn regenerate_flowers(
    flowers: &mut [Flower],
    environment: &Environment,
) -> Result<u32, WorldError> {
    if !environment.supports_regrowth() {
        return Ok(0);
    }

    let mut regrown: u32 = 0;
    for flower in flowers
        .iter_mut()
        .filter(|f| f.pollinated && f.nectar < MAX_NECTAR)
    {
        let next = flower
            .nectar
            .checked_add(NECTAR_REGROWTH)
            .ok_or(WorldError::ArithmeticOverflow)?;
        flower.nectar = next.min(MAX_NECTAR);
        regrown = regrown
            .checked_add(1)
            .ok_or(WorldError::ArithmeticOverflow)?;
    }
    Ok(regrown)
}

/// Grow pollinated crops, then harvest and remove every mature crop.
///
/// Returns the identifiers of harvested crops in registry order.
///
/// # Errors
///
/// Returns [`WorldError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn grow_crops(crops: &mut Vec<Crop>) -> Result<Vec<CropId>, WorldError> {
    for crop in crops
        .iter_mut()
        .filter(|c| c.pollinated && c.growth < HARVEST_GROWTH)
    {
        crop.growth = crop
            .growth
            .checked_add(GROWTH_PER_TICK)
            .ok_or(WorldError::ArithmeticOverflow)?;
    }

    let mut harvested = Vec::new();
    crops.retain(|crop| {
        if crop.growth >= HARVEST_GROWTH {
            debug!(crop_id = %crop.id, growth = %crop.growth, "Crop harvested");
            harvested.push(crop.id);
            false
        } else {
            true
        }
    });
    Ok(harvested)
}

/// Mean nectar across all flowers, or `None` when there are none.
pub fn mean_nectar(flowers: &[Flower]) -> Option<Decimal> {
    let count = Decimal::from(flowers.len());
    if count.is_zero() {
        return None;
    }
    let total = flowers
        .iter()
        .try_fold(Decimal::ZERO, |acc, f| acc.checked_add(f.nectar))?;
    total.checked_div(count)
}
