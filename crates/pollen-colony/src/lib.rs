//! Bee behaviour and colony lifecycle for the Pollen simulation.
//!
//! This crate holds the rules a bee follows each tick. It operates on the
//! entities owned by `pollen-world` and performs no I/O; the tick cycle in
//! `pollen-core` decides when each rule runs.
//!
//! # Modules
//!
//! - [`config`] -- Tunable per-bee parameters ([`ColonyConfig`])
//! - [`death`] -- Mortality conditions and cause priority
//! - [`error`] -- Error types for colony operations ([`ColonyError`])
//! - [`forage`] -- Flight toward flowers, pollination, nectar collection
//! - [`hive`] -- Return-to-hive and deposits into hive stores
//! - [`reproduction`] -- Resource-gated batch hatching
//! - [`vitals`] -- Per-tick aging

pub mod config;
pub mod death;
pub mod error;
pub mod forage;
pub mod hive;
pub mod reproduction;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use config::ColonyConfig;
pub use death::check_death;
pub use error::ColonyError;
pub use forage::{ForageOutcome, PollinationTarget, collect_nectar, forage, move_bee};
pub use hive::{Deposit, ReturnOutcome, resolve_home_hive, return_to_hive};
pub use reproduction::{can_reproduce, reproduce};
pub use vitals::{VitalTickResult, apply_vital_tick};
