//! Flight, pollination, and nectar collection.
//!
//! Each tick a bee that is not full:
//!
//! 1. Flies one step toward the nearest flower, landing on it when it is
//!    within reach. Equally near flowers are chosen between at random. With
//!    no flowers at all it wanders: it turns by a random offset and flies
//!    one step along the new heading.
//! 2. Forages whatever shares its unit cell. One of the flowers there, picked
//!    at random, is pollinated and then harvested for nectar; failing that,
//!    one of the crops there is pollinated.
//!
//! Full bees do neither; they wait for the return phase.

use pollen_types::{Bee, Crop, CropId, Flower, FlowerId};
use pollen_world::{Field, POLLINATION_GROWTH_BONUS};
use rand::Rng;
use rust_decimal::Decimal;

use crate::config::ColonyConfig;
use crate::error::{ColonyError, overflow};

// ---------------------------------------------------------------------------
// Pollination targets
// ---------------------------------------------------------------------------

/// Something a bee can pollinate.
#[derive(Debug)]
pub enum PollinationTarget<'a> {
    /// A flower; pollinating it only sets the flag.
    Flower(&'a mut Flower),
    /// A crop; first pollination also grants a growth bonus.
    Crop(&'a mut Crop),
}

impl PollinationTarget<'_> {
    /// Whether the target has already been pollinated.
    pub const fn is_pollinated(&self) -> bool {
        match self {
            Self::Flower(flower) => flower.pollinated,
            Self::Crop(crop) => crop.pollinated,
        }
    }

    /// Pollinate the target.
    ///
    /// Returns `true` on first pollination and `false` if the target was
    /// already pollinated, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::ArithmeticOverflow`] if the crop growth bonus
    /// overflows.
    pub fn pollinate(&mut self) -> Result<bool, ColonyError> {
        if self.is_pollinated() {
            return Ok(false);
        }
        match self {
            Self::Flower(flower) => {
                flower.pollinated = true;
            }
            Self::Crop(crop) => {
                crop.pollinated = true;
                crop.growth = crop
                    .growth
                    .checked_add(POLLINATION_GROWTH_BONUS)
                    .ok_or_else(|| overflow("crop pollination bonus"))?;
            }
        }
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Flight
// ---------------------------------------------------------------------------

/// Fly one step.
///
/// Full bees stay put. Otherwise the bee heads for the nearest flower and
/// lands on it if it is within one step; with no flowers it turns randomly
/// and flies one step. Ties between equally near flowers are broken with
/// `rng`. Positions wrap at the field edges.
pub fn move_bee(
    bee: &mut Bee,
    flowers: &[Flower],
    field: &Field,
    config: &ColonyConfig,
    rng: &mut impl Rng,
) {
    if bee.full {
        return;
    }

    let nearest = field
        .choose_nearest(bee.position, flowers, |flower| flower.position, rng)
        .and_then(|index| flowers.get(index));

    if let Some(flower) = nearest {
        if let Some(heading) = field.heading_towards(bee.position, flower.position) {
            bee.heading = heading;
        }
        if field.distance(bee.position, flower.position) <= config.flight_step {
            bee.position = flower.position;
            return;
        }
    } else {
        bee.heading = (bee.heading + random_turn(config, rng)).rem_euclid(360.0);
    }

    bee.position = field.advance(bee.position, bee.heading, config.flight_step);
}

/// Draw a random turn in degrees as the difference of two uniform draws.
fn random_turn(config: &ColonyConfig, rng: &mut impl Rng) -> f64 {
    let right = rng.random_range(0..=config.max_turn);
    let left = rng.random_range(0..=config.max_turn);
    f64::from(right) - f64::from(left)
}

// ---------------------------------------------------------------------------
// Foraging
// ---------------------------------------------------------------------------

/// Take nectar from a flower into the bee's load.
///
/// Transfers at most [`ColonyConfig::max_collect`]. A positive transfer
/// resets `days_since_food`, and reaching [`ColonyConfig::full_threshold`]
/// marks the bee full. Returns the amount transferred.
///
/// # Errors
///
/// Returns [`ColonyError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn collect_nectar(
    bee: &mut Bee,
    flower: &mut Flower,
    config: &ColonyConfig,
) -> Result<Decimal, ColonyError> {
    let taken = flower.nectar.min(config.max_collect);
    if taken > Decimal::ZERO {
        flower.nectar = flower
            .nectar
            .checked_sub(taken)
            .ok_or_else(|| overflow("flower nectar withdrawal"))?;
        bee.carrying_nectar = bee
            .carrying_nectar
            .checked_add(taken)
            .ok_or_else(|| overflow("bee nectar load"))?;
        bee.days_since_food = 0;
    }
    if bee.carrying_nectar >= config.full_threshold {
        bee.full = true;
    }
    Ok(taken)
}

/// What a bee did while foraging this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForageOutcome {
    /// The bee is full and waits for the return phase.
    Full,
    /// Nothing shares the bee's cell.
    Nothing,
    /// The bee visited a flower.
    Flower {
        /// The flower visited.
        flower: FlowerId,
        /// Whether this visit pollinated it for the first time.
        newly_pollinated: bool,
        /// Nectar collected.
        collected: Decimal,
    },
    /// The bee visited a crop.
    Crop {
        /// The crop visited.
        crop: CropId,
        /// Whether this visit pollinated it for the first time.
        newly_pollinated: bool,
    },
}

/// Forage whatever shares the bee's unit cell.
///
/// A co-located flower takes precedence over a crop. When several flowers
/// (or, with no flower, several crops) share the cell, one is picked
/// uniformly with `rng`.
///
/// # Errors
///
/// Returns [`ColonyError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn forage(
    bee: &mut Bee,
    flowers: &mut [Flower],
    crops: &mut [Crop],
    field: &Field,
    config: &ColonyConfig,
    rng: &mut impl Rng,
) -> Result<ForageOutcome, ColonyError> {
    if bee.full {
        return Ok(ForageOutcome::Full);
    }

    if let Some(index) = field.choose_co_located(bee.position, flowers, |f| f.position, rng)
        && let Some(flower) = flowers.get_mut(index)
    {
        let newly_pollinated = PollinationTarget::Flower(flower).pollinate()?;
        let collected = collect_nectar(bee, flower, config)?;
        return Ok(ForageOutcome::Flower {
            flower: flower.id,
            newly_pollinated,
            collected,
        });
    }

    if let Some(index) = field.choose_co_located(bee.position, crops, |c| c.position, rng)
        && let Some(crop) = crops.get_mut(index)
    {
        let newly_pollinated = PollinationTarget::Crop(crop).pollinate()?;
        return Ok(ForageOutcome::Crop {
            crop: crop.id,
            newly_pollinated,
        });
    }

    Ok(ForageOutcome::Nothing)
}
