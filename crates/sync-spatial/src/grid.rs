//! The uniform grid partition.
//!
//! A flat row-major array of cells over the offset-shifted world.
//! Entities are indexed into every cell their bounding square overlaps
//! (the square approximates the circular influence area; cheaper and
//! good enough for interest management). Point queries inspect only the
//! single cell containing the query point, so an entity whose circle
//! overlaps the point while its center sits in a neighboring cell can
//! be missed near cell borders. Callers needing exactness must not rely
//! on this path.

use rustc_hash::FxHashSet;
use sync_entity::{Dimension, Entity, EntityKey, Placement, Vec3};
use tracing::{debug, trace};

use crate::cell::{Cell, CellEntry};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::partition::{QueryHit, SpatialPartition};

/// Uniform-grid implementation of [`SpatialPartition`].
#[derive(Debug)]
pub struct GridPartition {
    config: GridConfig,
    /// Cell columns, `(max_x + x_offset) / area_size`.
    cols: usize,
    /// Cell rows, `(max_y + y_offset) / area_size`.
    rows: usize,
    /// Row-major cell array, `rows * cols` long.
    cells: Vec<Cell>,
    /// Scratch buffer reused across queries.
    results: Vec<QueryHit>,
}

impl GridPartition {
    /// Build a grid for the configured world.
    ///
    /// # Errors
    /// Rejects configurations the index math cannot support: a zero
    /// cell size, or extents that don't cover a single cell.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        if config.area_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let cols = ((u64::from(config.max_x) + u64::from(config.x_offset))
            / u64::from(config.area_size)) as usize;
        let rows = ((u64::from(config.max_y) + u64::from(config.y_offset))
            / u64::from(config.area_size)) as usize;
        if cols == 0 || rows == 0 {
            return Err(GridError::NoCells { cols, rows });
        }

        debug!(cols, rows, area_size = config.area_size, "grid partition created");

        Ok(Self {
            config,
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
            results: Vec::new(),
        })
    }

    /// The configuration the grid was built from.
    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Cell columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cell rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Clamp an already floored/ceiled axis value into `[0, count - 1]`.
    ///
    /// Every path clamps both bounds, so an entity pushed to (or past)
    /// the world edge lands in the nearest border cell instead of
    /// indexing out of range.
    fn axis_index(value: f32, count: usize) -> usize {
        let max = (count - 1) as f32;
        if value <= 0.0 {
            0
        } else if value >= max {
            count - 1
        } else {
            value as usize
        }
    }

    fn cell_index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Cells overlapped by the bounding square of a circle at
    /// `position` with radius `range`, as an inclusive index rectangle.
    fn cell_rect(&self, position: Vec3, range: u32) -> Placement {
        let area = self.config.area_size as f32;
        let x = position.x + self.config.x_offset as f32;
        let y = position.y + self.config.y_offset as f32;
        let range = range as f32;

        Placement {
            start_x: Self::axis_index(((x - range) / area).floor(), self.cols),
            stop_x: Self::axis_index(((x + range) / area).ceil(), self.cols),
            start_y: Self::axis_index(((y - range) / area).floor(), self.rows),
            stop_y: Self::axis_index(((y + range) / area).ceil(), self.rows),
        }
    }

    fn insert_rect(&mut self, rect: Placement, entry: CellEntry) {
        for y in rect.start_y..=rect.stop_y {
            for x in rect.start_x..=rect.stop_x {
                let index = self.cell_index(x, y);
                self.cells[index].insert(entry);
            }
        }
    }

    fn remove_rect(&mut self, rect: Placement, key: EntityKey) {
        for y in rect.start_y..=rect.stop_y {
            for x in rect.start_x..=rect.stop_x {
                let index = self.cell_index(x, y);
                self.cells[index].remove(key);
            }
        }
    }

    /// Number of distinct entities currently indexed.
    ///
    /// A deduplicating scan over every cell; diagnostics only, not for
    /// hot paths.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        let mut seen = FxHashSet::default();
        for cell in &self.cells {
            for entry in cell.iter() {
                seen.insert(entry.key);
            }
        }
        seen.len()
    }

    /// Raw sum of cell population sizes; an entity spanning k cells
    /// contributes k.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.cells.iter().map(Cell::len).sum()
    }

    /// Number of cells currently holding at least one entry.
    #[must_use]
    pub fn non_empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// One cell by index, for diagnostics and tests.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.cols && y < self.rows {
            Some(&self.cells[y * self.cols + x])
        } else {
            None
        }
    }

    /// Whether a record's cached placement matches its actual cell
    /// membership: present in every cell of its rectangle and in no
    /// other. Corruption here is otherwise undetectable (removal walks
    /// the cache), so mutators assert this in debug builds.
    #[must_use]
    pub fn placement_matches(&self, entity: &Entity) -> bool {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let inside = entity
                    .placement()
                    .is_some_and(|rect| rect.contains(x, y));
                if self.cells[y * self.cols + x].contains(entity.key()) != inside {
                    return false;
                }
            }
        }
        true
    }
}

impl SpatialPartition for GridPartition {
    fn add(&mut self, entity: &mut Entity) {
        if entity.range() == 0 {
            return;
        }

        let rect = self.cell_rect(entity.position(), entity.range());
        entity.set_placement(Some(rect));
        self.insert_rect(rect, CellEntry::of(entity));

        trace!(id = entity.id(), kind = entity.kind().0, ?rect, "entity indexed");
        debug_assert!(self.placement_matches(entity));
    }

    fn remove(&mut self, entity: &mut Entity) {
        if entity.range() == 0 {
            return;
        }
        // The cached rectangle is the ground truth for where the
        // entries live; the current position is deliberately not
        // consulted.
        let Some(rect) = entity.placement() else {
            return;
        };

        self.remove_rect(rect, entity.key());
        entity.set_placement(None);

        trace!(id = entity.id(), kind = entity.kind().0, "entity unindexed");
        debug_assert!(self.placement_matches(entity));
    }

    fn update_position(&mut self, entity: &mut Entity, _old_position: Vec3, new_position: Vec3) {
        if entity.range() == 0 {
            return;
        }

        let new_rect = self.cell_rect(new_position, entity.range());
        if let Some(old_rect) = entity.placement() {
            self.remove_rect(old_rect, entity.key());
        }
        entity.set_placement(Some(new_rect));
        self.insert_rect(
            new_rect,
            CellEntry {
                position: new_position,
                ..CellEntry::of(entity)
            },
        );

        trace!(id = entity.id(), kind = entity.kind().0, rect = ?new_rect, "entity moved");
        debug_assert!(self.placement_matches(entity));
    }

    fn update_range(&mut self, entity: &mut Entity, old_range: u32, new_range: u32) {
        // A transition through range 0 is not an index move: the entity
        // either was never indexed or leaves the index via remove().
        if old_range == 0 || new_range == 0 {
            return;
        }

        let new_rect = self.cell_rect(entity.position(), new_range);
        if let Some(old_rect) = entity.placement() {
            self.remove_rect(old_rect, entity.key());
        }
        entity.set_placement(Some(new_rect));
        self.insert_rect(
            new_rect,
            CellEntry {
                range_squared: u64::from(new_range) * u64::from(new_range),
                ..CellEntry::of(entity)
            },
        );

        trace!(id = entity.id(), kind = entity.kind().0, new_range, "entity resized");
        debug_assert!(self.placement_matches(entity));
    }

    fn update_dimension(
        &mut self,
        entity: &mut Entity,
        _old_dimension: Dimension,
        new_dimension: Dimension,
    ) {
        // Layout is never keyed by dimension, so no entries move; only
        // the snapshots the query filter reads are refreshed in place.
        let Some(rect) = entity.placement() else {
            return;
        };

        for y in rect.start_y..=rect.stop_y {
            for x in rect.start_x..=rect.stop_x {
                let index = self.cell_index(x, y);
                if let Some(entry) = self.cells[index].entry_mut(entity.key()) {
                    entry.dimension = new_dimension;
                }
            }
        }
    }

    fn find(&mut self, position: Vec3, dimension: Dimension) -> &[QueryHit] {
        let area = self.config.area_size as f32;
        let x = Self::axis_index(
            ((position.x + self.config.x_offset as f32) / area).floor(),
            self.cols,
        );
        let y = Self::axis_index(
            ((position.y + self.config.y_offset as f32) / area).floor(),
            self.rows,
        );
        let index = y * self.cols + x;

        self.results.clear();
        for entry in self.cells[index].iter() {
            let distance_squared = entry.position.distance_squared(position);
            if distance_squared > entry.range_squared as f32 {
                continue;
            }
            if !dimension.can_see(entry.dimension) {
                continue;
            }
            self.results.push(QueryHit {
                key: entry.key,
                distance_squared,
            });
        }

        &self.results
    }
}
