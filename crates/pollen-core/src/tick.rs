//! Tick cycle: the fixed-order phase loop that drives one simulated day.
//!
//! Each tick runs these phases, in order, on a single thread:
//!
//! 1. **Environment** -- advance the temperature random walk.
//! 2. **Forage** -- for every live bee in registry order: fly, forage,
//!    age, and check mortality. Dead bees are removed once the sweep ends.
//! 3. **Return** -- every full bee flies home and deposits.
//! 4. **Regrowth** -- pollinated flowers regain nectar.
//! 5. **Growth** -- pollinated crops grow; mature crops are harvested.
//! 6. **Reproduction** -- one brood hatches if the pool can pay for it.
//! 7. **Metrics** -- the clock advances and derived counters are rebuilt.
//!
//! Correctness depends on this order: a bee that fills up deposits only
//! after every bee has foraged, and newborns never act on the tick they
//! hatch.

use pollen_colony::{
    ColonyError, Deposit, ForageOutcome, ReturnOutcome, apply_vital_tick, forage, move_bee,
    reproduce, return_to_hive,
};
use pollen_types::{BeeId, CropId, DeathCause, Observables};
use pollen_world::{RegistryMut, WorldError, grow_crops, regenerate_flowers};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::clock::ClockError;
use crate::metrics;
use crate::state::SimulationState;

/// Errors that can occur during tick execution.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// A bee rule failed.
    #[error("colony error: {source}")]
    Colony {
        /// The underlying colony error.
        #[from]
        source: ColonyError,
    },

    /// A world operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// A tick-level counter overflowed.
    #[error("arithmetic overflow in tick bookkeeping: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

/// A bee that died this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeeDeath {
    /// The bee that died.
    pub bee: BeeId,
    /// Why it died.
    pub cause: DeathCause,
    /// Its age at death, in days.
    pub age: u32,
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// The tick number that was executed (equals completed ticks).
    pub tick: u64,
    /// Temperature after this tick's walk step.
    pub temperature: f64,
    /// Flowers pollinated for the first time this tick.
    pub flowers_pollinated: u32,
    /// Crops pollinated for the first time this tick.
    pub crops_pollinated: u32,
    /// Nectar collected from flowers this tick.
    pub nectar_collected: Decimal,
    /// Bees that died this tick, in sweep order.
    pub deaths: Vec<BeeDeath>,
    /// Deposits made this tick, in sweep order.
    pub deposits: Vec<Deposit>,
    /// Flowers that regained nectar.
    pub flowers_regrown: u32,
    /// Crops harvested this tick.
    pub harvested: Vec<CropId>,
    /// Bees hatched this tick.
    pub births: Vec<BeeId>,
    /// Global counters at the end of the tick.
    pub observables: Observables,
}

/// Result of the forage phase.
#[derive(Debug, Default)]
struct ForageReport {
    /// First-time flower pollinations.
    flowers_pollinated: u32,
    /// First-time crop pollinations.
    crops_pollinated: u32,
    /// Total nectar collected.
    nectar_collected: Decimal,
    /// Bees that died.
    deaths: Vec<BeeDeath>,
}

/// Execute one complete tick of the simulation.
///
/// # Errors
///
/// Returns [`TickError`] if checked arithmetic overflows or the registry
/// rejects a newborn. Domain no-ops are never errors.
pub fn run_tick(state: &mut SimulationState) -> Result<TickSummary, TickError> {
    // --- Phase 1: Environment ---
    let temperature = state.environment.advance(&mut state.rng);

    // --- Phase 2: Forage ---
    let report = phase_forage(state)?;

    // --- Phase 3: Return ---
    let deposits = phase_return(state)?;

    // --- Phase 4: Regrowth ---
    let flowers_regrown = regenerate_flowers(state.registry.flowers_mut(), &state.environment)?;

    // --- Phase 5: Growth ---
    let harvested = phase_growth(state)?;

    // --- Phase 6: Reproduction ---
    let births = reproduce(
        &mut state.registry,
        &mut state.hive_resources,
        &state.field,
        &state.colony_config,
        &mut state.rng,
    )?;

    // --- Phase 7: Metrics ---
    let tick = state.clock.advance()?;
    metrics::recompute(state)?;
    let observables = metrics::observe(state)?;

    info!(
        tick,
        temperature,
        bees = observables.bees,
        deaths = report.deaths.len(),
        births = births.len(),
        deposits = deposits.len(),
        harvested = harvested.len(),
        hive_resources = %observables.hive_resources,
        pollination_success = observables.pollination_success,
        crop_yield = observables.crop_yield,
        "Tick completed"
    );

    Ok(TickSummary {
        tick,
        temperature,
        flowers_pollinated: report.flowers_pollinated,
        crops_pollinated: report.crops_pollinated,
        nectar_collected: report.nectar_collected,
        deaths: report.deaths,
        deposits,
        flowers_regrown,
        harvested,
        births,
        observables,
    })
}

// ---------------------------------------------------------------------------
// Phase 2: Forage
// ---------------------------------------------------------------------------

/// Fly, forage, and age every live bee, then remove the dead.
fn phase_forage(state: &mut SimulationState) -> Result<ForageReport, TickError> {
    let mut report = ForageReport::default();
    let RegistryMut {
        bees,
        flowers,
        crops,
        ..
    } = state.registry.split_mut();

    for bee in bees.iter_mut() {
        move_bee(bee, flowers, &state.field, &state.colony_config, &mut state.rng);

        match forage(
            bee,
            flowers,
            crops,
            &state.field,
            &state.colony_config,
            &mut state.rng,
        )? {
            ForageOutcome::Flower {
                newly_pollinated,
                collected,
                ..
            } => {
                if newly_pollinated {
                    report.flowers_pollinated = increment(report.flowers_pollinated)?;
                }
                report.nectar_collected = report
                    .nectar_collected
                    .checked_add(collected)
                    .ok_or_else(|| overflow("nectar collected total"))?;
            }
            ForageOutcome::Crop {
                newly_pollinated: true,
                ..
            } => {
                report.crops_pollinated = increment(report.crops_pollinated)?;
            }
            ForageOutcome::Crop { .. } | ForageOutcome::Full | ForageOutcome::Nothing => {}
        }

        let vitals = apply_vital_tick(bee, &state.environment, &state.colony_config)?;
        if let Some(cause) = vitals.death {
            debug!(bee_id = %bee.id, %cause, age = bee.age, "Bee died");
            report.deaths.push(BeeDeath {
                bee: bee.id,
                cause,
                age: bee.age,
            });
        }
    }

    if !report.deaths.is_empty() {
        bees.retain(|bee| !report.deaths.iter().any(|death| death.bee == bee.id));
    }
    Ok(report)
}

// ---------------------------------------------------------------------------
// Phase 3: Return
// ---------------------------------------------------------------------------

/// Send every full bee home to deposit.
fn phase_return(state: &mut SimulationState) -> Result<Vec<Deposit>, TickError> {
    let mut deposits = Vec::new();
    let RegistryMut { bees, hives, .. } = state.registry.split_mut();

    for bee in bees.iter_mut().filter(|bee| bee.full) {
        if let ReturnOutcome::Deposited(deposit) =
            return_to_hive(bee, hives, &mut state.hive_resources, &state.field)?
        {
            debug!(
                bee_id = %deposit.bee,
                hive_id = %deposit.hive,
                amount = %deposit.amount,
                "Nectar deposited"
            );
            deposits.push(deposit);
        }
    }
    Ok(deposits)
}

// ---------------------------------------------------------------------------
// Phase 5: Growth
// ---------------------------------------------------------------------------

/// Grow crops and credit the yield for every harvest.
fn phase_growth(state: &mut SimulationState) -> Result<Vec<CropId>, TickError> {
    let RegistryMut { crops, .. } = state.registry.split_mut();
    let harvested = grow_crops(crops)?;
    let harvest_count: u64 = count(harvested.len(), "harvest count")?;
    state.crop_yield = state
        .crop_yield
        .checked_add(harvest_count)
        .ok_or_else(|| overflow("crop yield"))?;
    Ok(harvested)
}

/// Add one to a tick-level counter.
fn increment(value: u32) -> Result<u32, TickError> {
    value.checked_add(1).ok_or_else(|| overflow("pollination count"))
}

/// Convert a collection length into a counter type.
pub(crate) fn count<T: TryFrom<usize>>(len: usize, context: &str) -> Result<T, TickError> {
    T::try_from(len).ok().ok_or_else(|| overflow(context))
}

/// Build a [`TickError::ArithmeticOverflow`] for `context`.
fn overflow(context: &str) -> TickError {
    TickError::ArithmeticOverflow {
        context: String::from(context),
    }
}
