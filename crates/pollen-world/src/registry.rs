//! The entity registry: owner of every bee, flower, crop, and hive.
//!
//! Each kind is stored in its own vector in insertion order, which is also
//! the order the tick sweeps visit them. Identifiers are unique per kind;
//! inserting a clashing identifier is rejected.
//!
//! Bees refer to hives only by [`HiveId`]. Removing a hive clears every
//! bee's reference to it so no stale identifier survives.

use pollen_types::{Bee, BeeId, Crop, CropId, EntityKind, Flower, FlowerId, Hive, HiveId, Position};
use rand::Rng;
use rust_decimal::Decimal;

use crate::error::WorldError;
use crate::field::Field;

/// Inclusive range of whole nectar units a new flower starts with.
pub const INITIAL_NECTAR_RANGE: core::ops::RangeInclusive<u32> = 5..=9;

/// Owner of all simulation entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    /// Live bees in sweep order.
    bees: Vec<Bee>,
    /// Flowers. Never removed during a run.
    flowers: Vec<Flower>,
    /// Unharvested crops.
    crops: Vec<Crop>,
    /// Hives. Never removed during a run.
    hives: Vec<Hive>,
}

/// Simultaneous mutable access to every collection.
///
/// The foraging sweep mutates a bee while reading and mutating flowers and
/// crops; splitting the borrows lets it do so without copying.
#[derive(Debug)]
pub struct RegistryMut<'a> {
    /// Live bees.
    pub bees: &'a mut Vec<Bee>,
    /// Flowers.
    pub flowers: &'a mut [Flower],
    /// Unharvested crops.
    pub crops: &'a mut Vec<Crop>,
    /// Hives.
    pub hives: &'a mut [Hive],
}

impl Registry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            bees: Vec::new(),
            flowers: Vec::new(),
            crops: Vec::new(),
            hives: Vec::new(),
        }
    }

    /// Borrow every collection mutably at once.
    pub fn split_mut(&mut self) -> RegistryMut<'_> {
        RegistryMut {
            bees: &mut self.bees,
            flowers: &mut self.flowers,
            crops: &mut self.crops,
            hives: &mut self.hives,
        }
    }

    // -----------------------------------------------------------------------
    // Query by kind
    // -----------------------------------------------------------------------

    /// Live bees in sweep order.
    pub fn bees(&self) -> &[Bee] {
        &self.bees
    }

    /// All flowers.
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Mutable access to flowers.
    pub fn flowers_mut(&mut self) -> &mut [Flower] {
        &mut self.flowers
    }

    /// Unharvested crops.
    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    /// All hives.
    pub fn hives(&self) -> &[Hive] {
        &self.hives
    }

    /// Number of entities of the given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Bee => self.bees.len(),
            EntityKind::Flower => self.flowers.len(),
            EntityKind::Crop => self.crops.len(),
            EntityKind::Hive => self.hives.len(),
        }
    }

    // -----------------------------------------------------------------------
    // Query by identity
    // -----------------------------------------------------------------------

    /// Look up a bee.
    pub fn bee(&self, id: BeeId) -> Option<&Bee> {
        self.bees.iter().find(|bee| bee.id == id)
    }

    /// Look up a bee mutably.
    pub fn bee_mut(&mut self, id: BeeId) -> Option<&mut Bee> {
        self.bees.iter_mut().find(|bee| bee.id == id)
    }

    /// Look up a flower.
    pub fn flower(&self, id: FlowerId) -> Option<&Flower> {
        self.flowers.iter().find(|flower| flower.id == id)
    }

    /// Look up a crop.
    pub fn crop(&self, id: CropId) -> Option<&Crop> {
        self.crops.iter().find(|crop| crop.id == id)
    }

    /// Look up a hive.
    pub fn hive(&self, id: HiveId) -> Option<&Hive> {
        self.hives.iter().find(|hive| hive.id == id)
    }

    // -----------------------------------------------------------------------
    // Query by position
    // -----------------------------------------------------------------------

    /// The hive nearest to `position`, if any hive exists.
    pub fn nearest_hive(&self, field: &Field, position: Position) -> Option<HiveId> {
        field
            .nearest_index(position, &self.hives, |hive| hive.position)
            .and_then(|index| self.hives.get(index))
            .map(|hive| hive.id)
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Insert a bee.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if the identifier is taken.
    pub fn insert_bee(&mut self, bee: Bee) -> Result<BeeId, WorldError> {
        if self.bee(bee.id).is_some() {
            return Err(duplicate(EntityKind::Bee, bee.id));
        }
        let id = bee.id;
        self.bees.push(bee);
        Ok(id)
    }

    /// Insert a flower.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if the identifier is taken.
    pub fn insert_flower(&mut self, flower: Flower) -> Result<FlowerId, WorldError> {
        if self.flower(flower.id).is_some() {
            return Err(duplicate(EntityKind::Flower, flower.id));
        }
        let id = flower.id;
        self.flowers.push(flower);
        Ok(id)
    }

    /// Insert a crop.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if the identifier is taken.
    pub fn insert_crop(&mut self, crop: Crop) -> Result<CropId, WorldError> {
        if self.crop(crop.id).is_some() {
            return Err(duplicate(EntityKind::Crop, crop.id));
        }
        let id = crop.id;
        self.crops.push(crop);
        Ok(id)
    }

    /// Insert a hive.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if the identifier is taken.
    pub fn insert_hive(&mut self, hive: Hive) -> Result<HiveId, WorldError> {
        if self.hive(hive.id).is_some() {
            return Err(duplicate(EntityKind::Hive, hive.id));
        }
        let id = hive.id;
        self.hives.push(hive);
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Spawning
    // -----------------------------------------------------------------------

    /// Spawn an empty hive at a random position.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] on an identifier clash.
    pub fn spawn_hive(&mut self, field: &Field, rng: &mut impl Rng) -> Result<HiveId, WorldError> {
        let id = HiveId::from_random(rng.random());
        let position = field.random_position(rng);
        self.insert_hive(Hive::new(id, position))
    }

    /// Spawn an unpollinated flower at a random position with a whole
    /// amount of nectar drawn from [`INITIAL_NECTAR_RANGE`].
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] on an identifier clash.
    pub fn spawn_flower(
        &mut self,
        field: &Field,
        rng: &mut impl Rng,
    ) -> Result<FlowerId, WorldError> {
        let id = FlowerId::from_random(rng.random());
        let position = field.random_position(rng);
        let nectar = Decimal::from(rng.random_range(INITIAL_NECTAR_RANGE));
        self.insert_flower(Flower::new(id, position, nectar))
    }

    /// Spawn an unpollinated, ungrown crop at a random position.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] on an identifier clash.
    pub fn spawn_crop(&mut self, field: &Field, rng: &mut impl Rng) -> Result<CropId, WorldError> {
        let id = CropId::from_random(rng.random());
        let position = field.random_position(rng);
        self.insert_crop(Crop::new(id, position))
    }

    /// Spawn a newborn bee at a random position.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] on an identifier clash.
    pub fn spawn_bee(&mut self, field: &Field, rng: &mut impl Rng) -> Result<BeeId, WorldError> {
        let position = field.random_position(rng);
        self.spawn_bee_at(field, position, rng)
    }

    /// Spawn a newborn bee at `position` with a random heading.
    ///
    /// The home hive is the hive nearest to `position` at this moment, or
    /// unset when no hive exists.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] on an identifier clash.
    pub fn spawn_bee_at(
        &mut self,
        field: &Field,
        position: Position,
        rng: &mut impl Rng,
    ) -> Result<BeeId, WorldError> {
        let id = BeeId::from_random(rng.random());
        let heading = rng.random_range(0.0..360.0);
        let home_hive = self.nearest_hive(field, position);
        self.insert_bee(Bee::new(id, field.wrap(position), heading, home_hive))
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Remove a bee, returning it if it was present.
    pub fn remove_bee(&mut self, id: BeeId) -> Option<Bee> {
        let index = self.bees.iter().position(|bee| bee.id == id)?;
        Some(self.bees.remove(index))
    }

    /// Remove a crop, returning it if it was present.
    pub fn remove_crop(&mut self, id: CropId) -> Option<Crop> {
        let index = self.crops.iter().position(|crop| crop.id == id)?;
        Some(self.crops.remove(index))
    }

    /// Remove a hive and invalidate every bee's reference to it.
    pub fn remove_hive(&mut self, id: HiveId) -> Option<Hive> {
        let index = self.hives.iter().position(|hive| hive.id == id)?;
        let hive = self.hives.remove(index);
        for bee in &mut self.bees {
            if bee.home_hive == Some(id) {
                bee.home_hive = None;
            }
        }
        Some(hive)
    }
}

/// Build a duplicate-identifier error.
fn duplicate(kind: EntityKind, id: impl core::fmt::Display) -> WorldError {
    WorldError::DuplicateEntity {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn spawned_flowers_have_whole_nectar_in_range() {
        let field = Field::default();
        let mut rng = rng();
        let mut reg = Registry::new();
        for _ in 0..200 {
            reg.spawn_flower(&field, &mut rng).unwrap();
        }
        for flower in reg.flowers() {
            assert!(flower.nectar >= Decimal::from(5) && flower.nectar <= Decimal::from(9));
            assert_eq!(flower.nectar.fract(), Decimal::ZERO);
            assert!(!flower.pollinated);
            assert!(field.contains(flower.position));
        }
    }

    #[test]
    fn spawned_bee_is_homed_to_nearest_hive() {
        let field = Field::default();
        let mut rng = rng();
        let mut reg = Registry::new();
        let near = reg
            .insert_hive(Hive::new(HiveId::from_random(1), Position::new(5.0, 5.0)))
            .unwrap();
        reg.insert_hive(Hive::new(HiveId::from_random(2), Position::new(20.0, 20.0)))
            .unwrap();

        let bee_id = reg.spawn_bee_at(&field, Position::new(6.0, 6.0), &mut rng).unwrap();
        assert_eq!(reg.bee(bee_id).unwrap().home_hive, Some(near));
    }

    #[test]
    fn bee_spawned_without_hives_has_no_home() {
        let field = Field::default();
        let mut rng = rng();
        let mut reg = Registry::new();
        let bee_id = reg.spawn_bee(&field, &mut rng).unwrap();
        assert!(reg.bee(bee_id).unwrap().home_hive.is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut reg = Registry::new();
        let hive = Hive::new(HiveId::from_random(9), Position::new(1.0, 1.0));
        assert!(reg.insert_hive(hive.clone()).is_ok());
        assert!(matches!(
            reg.insert_hive(hive),
            Err(WorldError::DuplicateEntity {
                kind: EntityKind::Hive,
                ..
            })
        ));
        assert_eq!(reg.count(EntityKind::Hive), 1);
    }

    #[test]
    fn removing_hive_invalidates_home_references() {
        let field = Field::default();
        let mut rng = rng();
        let mut reg = Registry::new();
        let hive_id = reg.spawn_hive(&field, &mut rng).unwrap();
        let bee_id = reg.spawn_bee(&field, &mut rng).unwrap();
        assert_eq!(reg.bee(bee_id).unwrap().home_hive, Some(hive_id));

        assert!(reg.remove_hive(hive_id).is_some());
        assert!(reg.bee(bee_id).unwrap().home_hive.is_none());
    }

    #[test]
    fn removal_by_id() {
        let field = Field::default();
        let mut rng = rng();
        let mut reg = Registry::new();
        let bee = reg.spawn_bee(&field, &mut rng).unwrap();
        let crop = reg.spawn_crop(&field, &mut rng).unwrap();

        assert!(reg.remove_bee(bee).is_some());
        assert!(reg.remove_bee(bee).is_none());
        assert!(reg.remove_crop(crop).is_some());
        assert_eq!(reg.count(EntityKind::Bee), 0);
        assert_eq!(reg.count(EntityKind::Crop), 0);
    }
}
