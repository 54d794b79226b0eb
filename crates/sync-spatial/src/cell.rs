//! Grid cells and the entry snapshots they store.

use smallvec::SmallVec;
use sync_entity::{Dimension, Entity, EntityKey, Vec3};

/// Snapshot of one indexed entity, as stored in a grid cell.
///
/// Cells hold values, not references, so every mutation that goes
/// through the partition refreshes the snapshots it touches. Queries
/// then never need access to the caller-owned records.
#[derive(Clone, Copy, Debug)]
pub struct CellEntry {
    /// Identity, matched on removal.
    pub key: EntityKey,
    /// Position at the last add/update.
    pub position: Vec3,
    /// Squared influence range at the last add/update.
    pub range_squared: u64,
    /// Dimension at the last add/update.
    pub dimension: Dimension,
}

impl CellEntry {
    /// Snapshot the queryable state of a record.
    #[must_use]
    pub fn of(entity: &Entity) -> Self {
        Self {
            key: entity.key(),
            position: entity.position(),
            range_squared: entity.range_squared(),
            dimension: entity.dimension(),
        }
    }
}

/// One fixed-size square region of the grid.
///
/// An unordered bag of entries; identity uniqueness is the caller's
/// contract, not enforced here. Most cells hold a handful of entities,
/// so the entry list stays inline until it outgrows its spill
/// threshold.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    entries: SmallVec<[CellEntry; 4]>,
}

impl Cell {
    pub(crate) fn insert(&mut self, entry: CellEntry) {
        self.entries.push(entry);
    }

    /// Remove the first entry matching `key`. Returns whether one was
    /// found; a miss is not an error.
    pub(crate) fn remove(&mut self, key: EntityKey) -> bool {
        match self.entries.iter().position(|entry| entry.key == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Mutable access to the first entry matching `key`.
    pub(crate) fn entry_mut(&mut self, key: EntityKey) -> Option<&mut CellEntry> {
        self.entries.iter_mut().find(|entry| entry.key == key)
    }

    /// Whether any entry matches `key`.
    #[must_use]
    pub fn contains(&self, key: EntityKey) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Number of entries in the cell.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cell holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the cell's entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &CellEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_entity::EntityKind;

    fn entry(id: u64) -> CellEntry {
        CellEntry {
            key: EntityKey::new(id, EntityKind(0)),
            position: Vec3::ZERO,
            range_squared: 100,
            dimension: Dimension::SHARED,
        }
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut cell = Cell::default();
        cell.insert(entry(1));
        cell.insert(entry(2));
        cell.insert(entry(1));

        assert!(cell.remove(EntityKey::new(1, EntityKind(0))));
        assert_eq!(cell.len(), 2);
        // The duplicate is still there.
        assert!(cell.contains(EntityKey::new(1, EntityKind(0))));
    }

    #[test]
    fn test_remove_missing_is_benign() {
        let mut cell = Cell::default();
        cell.insert(entry(1));

        assert!(!cell.remove(EntityKey::new(9, EntityKind(0))));
        assert_eq!(cell.len(), 1);
    }

    #[test]
    fn test_identity_needs_both_id_and_kind() {
        let mut cell = Cell::default();
        cell.insert(entry(1));

        // Same id, different kind: no match.
        assert!(!cell.remove(EntityKey::new(1, EntityKind(7))));
        assert!(cell.contains(EntityKey::new(1, EntityKind(0))));
    }
}
