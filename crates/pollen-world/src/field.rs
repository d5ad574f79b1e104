//! The spatial field: a bounded plane that wraps at its edges.
//!
//! Positions live in `[0, width) x [0, height)`. Moving past an edge
//! re-enters from the opposite side, and distances use the shortest
//! displacement across the wrap. Two positions are *co-located* when
//! they fall in the same unit cell.
//!
//! Headings are degrees clockwise from north (`0` is `+y`, `90` is `+x`).

use core::cmp::Ordering;

use pollen_types::Position;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::WorldError;

/// Default field width and height.
pub const DEFAULT_FIELD_SIZE: f64 = 33.0;

/// A wrapping 2D field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Extent along x.
    width: f64,
    /// Extent along y.
    height: f64,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_SIZE,
            height: DEFAULT_FIELD_SIZE,
        }
    }
}

impl Field {
    /// Create a field of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidFieldSize`] unless both dimensions are
    /// finite and at least 1.
    pub fn new(width: f64, height: f64) -> Result<Self, WorldError> {
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0) {
            return Err(WorldError::InvalidFieldSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Return the field width.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Return the field height.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Check whether a position lies inside the field bounds.
    pub fn contains(&self, position: Position) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }

    /// Wrap a position back into the field.
    pub fn wrap(&self, position: Position) -> Position {
        Position::new(wrap_axis(position.x, self.width), wrap_axis(position.y, self.height))
    }

    /// Shortest displacement `(dx, dy)` from `from` to `to` across the wrap.
    pub fn displacement(&self, from: Position, to: Position) -> (f64, f64) {
        (
            shortest_delta(from.x, to.x, self.width),
            shortest_delta(from.y, to.y, self.height),
        )
    }

    /// Euclidean distance between two positions across the wrap.
    pub fn distance(&self, a: Position, b: Position) -> f64 {
        let (dx, dy) = self.displacement(a, b);
        dx.hypot(dy)
    }

    /// Heading from `from` that points at `to`.
    ///
    /// Returns `None` when the positions coincide, since no direction is
    /// defined.
    pub fn heading_towards(&self, from: Position, to: Position) -> Option<f64> {
        let (dx, dy) = self.displacement(from, to);
        if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
            return None;
        }
        Some(dx.atan2(dy).to_degrees().rem_euclid(360.0))
    }

    /// Move `distance` units from `from` along `heading`, wrapping at edges.
    pub fn advance(&self, from: Position, heading: f64, distance: f64) -> Position {
        let (sin, cos) = heading.to_radians().sin_cos();
        self.wrap(Position::new(
            distance.mul_add(sin, from.x),
            distance.mul_add(cos, from.y),
        ))
    }

    /// Unit cell containing a position, used for co-location.
    #[allow(clippy::cast_possible_truncation)]
    pub fn cell(&self, position: Position) -> (i64, i64) {
        // Wrapped coordinates are finite and bounded by the field size.
        let wrapped = self.wrap(position);
        (wrapped.x.floor() as i64, wrapped.y.floor() as i64)
    }

    /// Draw a uniformly random position inside the field.
    pub fn random_position(&self, rng: &mut impl Rng) -> Position {
        Position::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        )
    }

    /// Index of the item nearest to `from`.
    ///
    /// Ties resolve to the earliest item. Returns `None` for an empty slice.
    pub fn nearest_index<T>(
        &self,
        from: Position,
        items: &[T],
        position_of: impl Fn(&T) -> Position,
    ) -> Option<usize> {
        self.nearest_indices(from, items, position_of).first().copied()
    }

    /// Indices of every item tied for nearest to `from`, in slice order.
    pub fn nearest_indices<T>(
        &self,
        from: Position,
        items: &[T],
        position_of: impl Fn(&T) -> Position,
    ) -> Vec<usize> {
        let mut nearest = Vec::new();
        let mut best = f64::INFINITY;
        for (index, item) in items.iter().enumerate() {
            let distance = self.distance(from, position_of(item));
            match distance.total_cmp(&best) {
                Ordering::Less => {
                    best = distance;
                    nearest.clear();
                    nearest.push(index);
                }
                Ordering::Equal => nearest.push(index),
                Ordering::Greater => {}
            }
        }
        nearest
    }

    /// Indices of every item sharing a unit cell with `at`, in slice order.
    pub fn co_located_indices<T>(
        &self,
        at: Position,
        items: &[T],
        position_of: impl Fn(&T) -> Position,
    ) -> Vec<usize> {
        let cell = self.cell(at);
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.cell(position_of(item)) == cell)
            .map(|(index, _)| index)
            .collect()
    }

    /// Index of an item nearest to `from`, chosen uniformly among ties.
    pub fn choose_nearest<T>(
        &self,
        from: Position,
        items: &[T],
        position_of: impl Fn(&T) -> Position,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        self.nearest_indices(from, items, position_of)
            .choose(rng)
            .copied()
    }

    /// Index of an item sharing a unit cell with `at`, chosen uniformly.
    pub fn choose_co_located<T>(
        &self,
        at: Position,
        items: &[T],
        position_of: impl Fn(&T) -> Position,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        self.co_located_indices(at, items, position_of)
            .choose(rng)
            .copied()
    }
}

/// Wrap a coordinate into `[0, extent)`.
fn wrap_axis(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Signed shortest delta from `from` to `to` on a circle of `extent`.
fn shortest_delta(from: f64, to: f64, extent: f64) -> f64 {
    let raw = (to - from).rem_euclid(extent);
    if raw > extent / 2.0 { raw - extent } else { raw }
}
