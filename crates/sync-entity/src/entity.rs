//! The mutable entity record.

use crate::{Dimension, EntityKey, EntityKind, Vec3};

/// Inclusive cell-index rectangle an entity currently occupies.
///
/// This is the authoritative record of where the entity's cell entries
/// live: removal and updates walk this rectangle rather than recomputing
/// it from the entity's current state. Written only by the spatial
/// partition that indexed the entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub start_x: usize,
    pub stop_x: usize,
    pub start_y: usize,
    pub stop_y: usize,
}

impl Placement {
    /// Whether the cell at `(x, y)` falls inside the rectangle.
    #[must_use]
    pub const fn contains(self, x: usize, y: usize) -> bool {
        x >= self.start_x && x <= self.stop_x && y >= self.start_y && y <= self.stop_y
    }

    /// Number of cells the rectangle covers.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.stop_x - self.start_x + 1) * (self.stop_y - self.start_y + 1)
    }
}

/// One trackable object.
///
/// A plain mutable data holder: identity, position, influence range and
/// visibility dimension, plus the partition-owned placement cache. A
/// range of 0 marks an entity that is never spatially indexed.
///
/// The record's owner reports every mutation to the partition that
/// indexes it (position, range and dimension changes), updating the
/// record first and then calling the matching partition operation.
#[derive(Clone, Debug)]
pub struct Entity {
    key: EntityKey,
    position: Vec3,
    range: u32,
    range_squared: u64,
    dimension: Dimension,
    placement: Option<Placement>,
}

impl Entity {
    /// Create a record. The squared range is derived once here and kept
    /// in sync by [`Entity::set_range`].
    #[must_use]
    pub const fn new(key: EntityKey, position: Vec3, range: u32, dimension: Dimension) -> Self {
        Self {
            key,
            position,
            range,
            range_squared: (range as u64) * (range as u64),
            dimension,
            placement: None,
        }
    }

    #[must_use]
    pub const fn key(&self) -> EntityKey {
        self.key
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.key.id
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.key.kind
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    pub const fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Influence radius. 0 means "never indexed".
    #[must_use]
    pub const fn range(&self) -> u32 {
        self.range
    }

    /// Cached square of the range, used by query distance checks.
    #[must_use]
    pub const fn range_squared(&self) -> u64 {
        self.range_squared
    }

    pub const fn set_range(&mut self, range: u32) {
        self.range = range;
        self.range_squared = (range as u64) * (range as u64);
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub const fn set_dimension(&mut self, dimension: Dimension) {
        self.dimension = dimension;
    }

    /// Current cell placement, if indexed.
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Overwrite the placement cache. Reserved for the partition that
    /// indexes this record; callers never touch it.
    pub const fn set_placement(&mut self, placement: Option<Placement>) {
        self.placement = placement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_squared_stays_in_sync() {
        let key = EntityKey::new(1, EntityKind(0));
        let mut entity = Entity::new(key, Vec3::ZERO, 50, Dimension::SHARED);
        assert_eq!(entity.range_squared(), 2500);

        entity.set_range(300);
        assert_eq!(entity.range(), 300);
        assert_eq!(entity.range_squared(), 90_000);

        entity.set_range(0);
        assert_eq!(entity.range_squared(), 0);
    }

    #[test]
    fn test_new_record_is_unplaced() {
        let key = EntityKey::new(9, EntityKind(2));
        let entity = Entity::new(key, Vec3::ZERO, 10, Dimension::Global);
        assert_eq!(entity.placement(), None);
    }

    #[test]
    fn test_placement_contains() {
        let placement = Placement {
            start_x: 2,
            stop_x: 4,
            start_y: 1,
            stop_y: 1,
        };
        assert!(placement.contains(2, 1));
        assert!(placement.contains(4, 1));
        assert!(!placement.contains(5, 1));
        assert!(!placement.contains(3, 0));
        assert_eq!(placement.cell_count(), 3);
    }
}
