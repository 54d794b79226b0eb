//! Grid construction errors.
//!
//! Construction is the only fallible operation in this crate. Runtime
//! mutations and queries never fail; benign conditions (zero-range
//! entities, removals that find nothing) are silent no-ops.

use thiserror::Error;

/// Error building a grid partition from its configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A cell edge length of zero would make every index computation
    /// divide by zero.
    #[error("grid cell size must be non-zero")]
    ZeroCellSize,

    /// The configured extents don't cover a single cell on some axis.
    #[error("grid extents produce no cells ({cols} cols x {rows} rows)")]
    NoCells {
        /// Computed cell columns.
        cols: usize,
        /// Computed cell rows.
        rows: usize,
    },
}
