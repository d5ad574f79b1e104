//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the simulation has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. IDs are random (v4)
//! UUIDs built from bits the caller supplies, so a seeded generator
//! yields the same identifiers on every run.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::{Builder, Uuid};

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create an identifier from 128 random bits.
            ///
            /// The version and variant bits are overwritten so the result
            /// is always a well-formed v4 UUID.
            pub const fn from_random(bits: u128) -> Self {
                Self(Builder::from_random_bytes(bits.to_le_bytes()).into_uuid())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a bee.
    BeeId
}

define_id! {
    /// Unique identifier for a flower.
    FlowerId
}

define_id! {
    /// Unique identifier for a crop.
    CropId
}

define_id! {
    /// Unique identifier for a hive.
    HiveId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bits_give_same_id() {
        let a = BeeId::from_random(0x1234_5678_9abc_def0_1122_3344_5566_7788);
        let b = BeeId::from_random(0x1234_5678_9abc_def0_1122_3344_5566_7788);
        assert_eq!(a, b);
    }

    #[test]
    fn ids_are_v4() {
        let id = HiveId::from_random(0);
        assert_eq!(id.into_inner().get_version_num(), 4);
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = FlowerId::from_random(42);
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<FlowerId, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = CropId::from_random(7);
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
