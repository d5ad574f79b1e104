//! Shared type definitions for the Pollen simulation.
//!
//! This crate is the single source of truth for the entity records and
//! observables used across the Pollen workspace. Types defined here flow
//! downstream to `TypeScript` via `ts-rs` for dashboard collaborators.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Entity kinds and death causes
//! - [`structs`] -- Positions and the bee, flower, crop, and hive records
//! - [`observables`] -- Global counters exposed to UI collaborators

pub mod enums;
pub mod ids;
pub mod observables;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{DeathCause, EntityKind};
pub use ids::{BeeId, CropId, FlowerId, HiveId};
pub use observables::Observables;
pub use structs::{Bee, Crop, Flower, Hive, Position};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes bindings for every type reachable from these roots
        // into the `bindings/` directory relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::BeeId::export_all();
        let _ = crate::ids::FlowerId::export_all();
        let _ = crate::ids::CropId::export_all();
        let _ = crate::ids::HiveId::export_all();

        // Enums
        let _ = crate::enums::EntityKind::export_all();
        let _ = crate::enums::DeathCause::export_all();

        // Structs
        let _ = crate::structs::Position::export_all();
        let _ = crate::structs::Hive::export_all();
        let _ = crate::structs::Flower::export_all();
        let _ = crate::structs::Crop::export_all();
        let _ = crate::structs::Bee::export_all();
        let _ = crate::observables::Observables::export_all();
    }
}
