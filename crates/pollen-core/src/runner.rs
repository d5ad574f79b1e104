//! Simulation loop runner.
//!
//! This module provides [`run_simulation`], the top-level async function
//! that drives the tick loop with support for:
//!
//! - **Bounded simulation**: stop after `max_ticks`
//! - **Paced ticks**: the configured interval is slept between ticks
//! - **Clean stop**: a stop request is honoured before the next tick
//! - **Extinction**: the run ends once no bee is left alive
//!
//! The runner wraps the single-tick [`Simulation::step`] and adds the
//! control plane around it. Agent logic never runs concurrently; the only
//! awaits are the sleeps between ticks.

use std::sync::Arc;

use tracing::{info, warn};

use crate::control::{RunControl, SimulationEndReason};
use crate::simulation::Simulation;
use crate::state::SimulationState;
use crate::tick::{TickError, TickSummary};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed by this run.
    pub total_ticks: u64,
}

/// Callback invoked after each tick completes.
///
/// Implementations can use this to report observables, feed a plot, etc.
/// The callback receives the tick summary and the current state.
pub trait TickCallback: Send {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState);
}

/// A no-op tick callback.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick execution fails.
pub async fn run_simulation(
    simulation: &mut Simulation,
    control: &Arc<RunControl>,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;

    info!(
        max_ticks = control.max_ticks(),
        tick_interval_ms = control.tick_interval_ms(),
        bees = simulation.state().bees_alive(),
        "Simulation starting"
    );

    loop {
        // --- Check stop request (before tick) ---
        if control.is_stop_requested() {
            info!("Stop requested");
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::StopRequested,
                final_summary: last_summary,
                total_ticks,
            });
        }

        // --- Execute tick ---
        let summary = simulation.step()?;

        total_ticks = total_ticks.saturating_add(1);

        // --- Notify callback ---
        callback.on_tick(&summary, simulation.state());

        // --- Check extinction ---
        if summary.observables.bees == 0 {
            warn!(tick = summary.tick, "All bees dead -- extinction");
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::Extinction,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        // --- Check tick limit (after tick) ---
        if control.tick_limit_reached(summary.tick) {
            info!(
                tick = summary.tick,
                max_ticks = control.max_ticks(),
                "Tick limit reached"
            );
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::MaxTicksReached,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        last_summary = Some(summary);

        // --- Sleep for tick interval ---
        let interval_ms = control.tick_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        } else {
            tokio::task::yield_now().await;
        }
    }
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = %result.end_reason,
        total_ticks = result.total_ticks,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        final_bees = result.final_summary.as_ref().map(|s| s.observables.bees),
        "Simulation ended"
    );

    if let Some(ref summary) = result.final_summary {
        let obs = &summary.observables;
        info!(
            tick = obs.tick,
            bees = obs.bees,
            hive_resources = %obs.hive_resources,
            pollination_success = obs.pollination_success,
            crop_yield = obs.crop_yield,
            temperature = obs.temperature,
            "Final observables"
        );
    } else {
        warn!("Simulation ended with no ticks executed");
    }
}
