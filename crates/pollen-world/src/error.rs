//! Error types for the `pollen-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type alias.

use pollen_types::EntityKind;

/// Errors that can occur during field and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The field dimensions are not positive finite numbers.
    #[error("invalid field size {width} x {height}")]
    InvalidFieldSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// An entity was inserted with an identifier already in use.
    #[error("duplicate {kind:?} id: {id}")]
    DuplicateEntity {
        /// Kind of the rejected entity.
        kind: EntityKind,
        /// The clashing identifier.
        id: String,
    },

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in world calculation")]
    ArithmeticOverflow,
}
