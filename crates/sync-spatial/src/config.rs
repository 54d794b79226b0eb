//! Grid configuration.

use serde::{Deserialize, Serialize};

/// Construction parameters for a uniform grid partition.
///
/// Supplied once by the owning subsystem (usually from its server
/// config) and immutable afterwards; the grid never resizes. The
/// offsets shift a possibly-negative world coordinate space into the
/// non-negative index space the cell array uses, so a world spanning
/// `[-2048, 4096]` is configured as `max = 4096`, `offset = 2048`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// World extent on the x axis, before offsetting.
    pub max_x: u32,
    /// World extent on the y axis, before offsetting.
    pub max_y: u32,
    /// Cell edge length in world units.
    pub area_size: u32,
    /// Shift applied to every x coordinate.
    pub x_offset: u32,
    /// Shift applied to every y coordinate.
    pub y_offset: u32,
}

impl GridConfig {
    /// Create a configuration from its parts.
    #[must_use]
    pub const fn new(max_x: u32, max_y: u32, area_size: u32, x_offset: u32, y_offset: u32) -> Self {
        Self {
            max_x,
            max_y,
            area_size,
            x_offset,
            y_offset,
        }
    }
}
