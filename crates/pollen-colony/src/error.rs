//! Error types for the pollen-colony crate.
//!
//! Domain no-ops (no hive, an empty flower, a target already pollinated)
//! are ordinary branches and never surface here. Only arithmetic faults
//! and registry failures do.

use pollen_world::WorldError;

/// Errors that can occur while advancing bees.
#[derive(Debug, thiserror::Error)]
pub enum ColonyError {
    /// An arithmetic overflow occurred while updating a bee, hive, or plant.
    #[error("arithmetic overflow in colony computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },

    /// A registry operation failed while spawning bees.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

/// Build an [`ColonyError::ArithmeticOverflow`] for `context`.
pub(crate) fn overflow(context: &str) -> ColonyError {
    ColonyError::ArithmeticOverflow {
        context: String::from(context),
    }
}
