//! Read-only observables published to UI and telemetry collaborators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A snapshot of the simulation's global counters after a tick.
///
/// This is the whole surface a plotting widget or monitor reads. It is
/// rebuilt from scratch by the metrics pass each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Observables {
    /// Number of ticks completed since setup.
    pub tick: u64,
    /// Live bee count.
    pub bees: u32,
    /// Flowers in the field.
    pub flowers: u32,
    /// Crops still growing in the field.
    pub crops: u32,
    /// Hives in the field.
    pub hives: u32,
    /// Pooled colony resources gating reproduction.
    #[ts(as = "String")]
    pub hive_resources: Decimal,
    /// Count of pollinated flowers.
    pub pollination_success: u32,
    /// Crops harvested since setup.
    pub crop_yield: u64,
    /// Current temperature.
    pub temperature: f64,
    /// Mean nectar across flowers, `None` when there are no flowers.
    #[ts(as = "Option<String>")]
    pub mean_flower_nectar: Option<Decimal>,
}
