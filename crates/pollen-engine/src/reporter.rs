//! Tick callback that reports observables.
//!
//! Every `every` ticks, and on any tick with deaths or births, the
//! callback serializes the [`Observables`] snapshot to JSON and emits it
//! as a structured `info!` event. A plotting collaborator can tail the log
//! and parse the `observables` field directly.

use pollen_core::{SimulationState, TickCallback, TickSummary};
use pollen_types::Observables;
use tracing::{debug, info, warn};

/// Callback that logs observables at a fixed tick period.
pub struct ObservableReporter {
    /// Report every this many ticks. Zero reports every tick.
    every: u64,
    /// Number of reports emitted.
    reports: u64,
    /// The last snapshot seen.
    last: Option<Observables>,
}

impl ObservableReporter {
    /// Create a reporter that logs every `every` ticks.
    pub const fn new(every: u64) -> Self {
        Self {
            every,
            reports: 0,
            last: None,
        }
    }

    /// Number of reports emitted so far.
    pub const fn reports(&self) -> u64 {
        self.reports
    }

    /// The most recent observable snapshot.
    pub const fn last(&self) -> Option<&Observables> {
        self.last.as_ref()
    }

    /// Whether the tick falls on the reporting period.
    const fn is_due(&self, tick: u64) -> bool {
        matches!(tick.checked_rem(self.every), None | Some(0))
    }
}

impl TickCallback for ObservableReporter {
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState) {
        debug!(
            tick = summary.tick,
            deaths = summary.deaths.len(),
            births = summary.births.len(),
            bees_alive = state.bees_alive(),
            "Tick observed"
        );

        let eventful = !summary.deaths.is_empty() || !summary.births.is_empty();
        if self.is_due(summary.tick) || eventful {
            match serde_json::to_string(&summary.observables) {
                Ok(json) => {
                    info!(tick = summary.tick, observables = %json, "Observables");
                    self.reports = self.reports.saturating_add(1);
                }
                Err(e) => {
                    warn!(tick = summary.tick, error = %e, "Failed to serialize observables");
                }
            }
        }

        self.last = Some(summary.observables.clone());
    }
}
