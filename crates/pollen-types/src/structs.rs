//! Core entity records for the Pollen simulation.
//!
//! Covers [`Position`] and the four agent kinds: [`Hive`], [`Flower`],
//! [`Crop`], and [`Bee`]. Nectar, stores, and growth are exact
//! [`Decimal`] quantities; positions and headings are `f64`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{BeeId, CropId, FlowerId, HiveId};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A point in the wrapping 2D plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Hive
// ---------------------------------------------------------------------------

/// A hive that receives nectar deposits from its bees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Hive {
    /// Unique identifier.
    pub id: HiveId,
    /// Location of the hive. Fixed for the whole run.
    pub position: Position,
    /// Nectar accumulated from deposits.
    #[ts(as = "String")]
    pub stores: Decimal,
}

impl Hive {
    /// Create an empty hive at `position`.
    pub const fn new(id: HiveId, position: Position) -> Self {
        Self {
            id,
            position,
            stores: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Flower
// ---------------------------------------------------------------------------

/// A flower holding nectar that bees collect and pollinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Flower {
    /// Unique identifier.
    pub id: FlowerId,
    /// Location of the flower.
    pub position: Position,
    /// Nectar currently available, in `[0, 10]`.
    #[ts(as = "String")]
    pub nectar: Decimal,
    /// Whether a bee has visited. Never reset once set.
    pub pollinated: bool,
}

impl Flower {
    /// Create an unpollinated flower holding `nectar`.
    pub const fn new(id: FlowerId, position: Position, nectar: Decimal) -> Self {
        Self {
            id,
            position,
            nectar,
            pollinated: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Crop
// ---------------------------------------------------------------------------

/// A crop that grows once pollinated and is harvested at full growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Crop {
    /// Unique identifier.
    pub id: CropId,
    /// Location of the crop.
    pub position: Position,
    /// Whether a bee has visited. Never reset once set.
    pub pollinated: bool,
    /// Accumulated growth; harvested at 5.
    #[ts(as = "String")]
    pub growth: Decimal,
}

impl Crop {
    /// Create an unpollinated crop with no growth.
    pub const fn new(id: CropId, position: Position) -> Self {
        Self {
            id,
            position,
            pollinated: false,
            growth: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Bee
// ---------------------------------------------------------------------------

/// A forager bee.
///
/// `home_hive` is a weak reference into the hive registry. It is resolved
/// lazily and may be unset when no hive existed at the bee's creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Bee {
    /// Unique identifier.
    pub id: BeeId,
    /// Current location.
    pub position: Position,
    /// Direction of travel in degrees, clockwise from north.
    pub heading: f64,
    /// Nectar carried back to the hive.
    #[ts(as = "String")]
    pub carrying_nectar: Decimal,
    /// Age in days.
    pub age: u32,
    /// Whether the load has reached the return threshold.
    pub full: bool,
    /// Days since the bee last collected nectar or deposited.
    pub days_since_food: u32,
    /// The hive this bee deposits into.
    pub home_hive: Option<HiveId>,
}

impl Bee {
    /// Create a newborn bee with all counters zeroed.
    pub const fn new(
        id: BeeId,
        position: Position,
        heading: f64,
        home_hive: Option<HiveId>,
    ) -> Self {
        Self {
            id,
            position,
            heading,
            carrying_nectar: Decimal::ZERO,
            age: 0,
            full: false,
            days_since_food: 0,
            home_hive,
        }
    }
}
