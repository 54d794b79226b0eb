//! Spatial partitioning for entity interest management.
//!
//! Answers "which entities could an observer at this point, in this
//! dimension, be interested in?" without rescanning the population.
//! Entities register with a partition and report every position, range
//! and dimension change; the partition keeps its index incrementally
//! correct and serves point queries out of the affected neighborhood
//! only.
//!
//! The shipped strategy is a uniform grid ([`GridPartition`]): cells of
//! fixed edge length over an offset-shifted world, each entity indexed
//! into every cell its influence square overlaps. Alternative
//! strategies plug in behind [`SpatialPartition`].
//!
//! # Example
//!
//! ```
//! use sync_entity::{Dimension, Entity, EntityKey, EntityKind, Vec3};
//! use sync_spatial::{GridConfig, GridPartition, SpatialPartition};
//!
//! let mut grid = GridPartition::new(GridConfig::new(4096, 4096, 128, 2048, 2048))?;
//!
//! let key = EntityKey::new(1, EntityKind(0));
//! let mut marker = Entity::new(key, Vec3::new(100.0, 100.0, 0.0), 50, Dimension::SHARED);
//! grid.add(&mut marker);
//!
//! let hits = grid.find(Vec3::new(110.0, 110.0, 0.0), Dimension::SHARED);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].distance_squared, 200.0);
//! # Ok::<(), sync_spatial::GridError>(())
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod partition;

pub use cell::{Cell, CellEntry};
pub use config::GridConfig;
pub use error::GridError;
pub use grid::GridPartition;
pub use partition::{QueryHit, SpatialPartition};
