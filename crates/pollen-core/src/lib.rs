//! Configuration, tick cycle, and run loop for the Pollen simulation.
//!
//! This crate owns the 7-phase tick cycle that drives one simulated day:
//! Environment, Forage, Return, Regrowth, Growth, Reproduction, and
//! Metrics.
//!
//! # Modules
//!
//! - [`clock`] -- Completed-tick counter.
//! - [`config`] -- Configuration loading from `pollen-config.yaml` into
//!   strongly-typed structs, with range validation.
//! - [`control`] -- Stop flag, adjustable tick interval, and tick limit
//!   shared between the host and the run loop.
//! - [`metrics`] -- Derived counters and the [`Observables`] snapshot.
//! - [`runner`] -- The async run loop with a per-tick callback.
//! - [`simulation`] -- The [`Simulation`] handle a host drives.
//! - [`state`] -- [`SimulationState`] and seeded setup.
//! - [`tick`] -- The fixed-order phase loop.
//!
//! [`Observables`]: pollen_types::Observables

pub mod clock;
pub mod config;
pub mod control;
pub mod metrics;
pub mod runner;
pub mod simulation;
pub mod state;
pub mod tick;

pub use config::{ConfigError, SimulationConfig};
pub use control::{RunControl, SimulationEndReason};
pub use runner::{NoOpCallback, RunnerError, SimulationResult, TickCallback, run_simulation};
pub use simulation::Simulation;
pub use state::{SetupError, SimulationState};
pub use tick::{BeeDeath, TickError, TickSummary};
