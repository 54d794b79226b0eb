//! World-space position math.

use serde::{Deserialize, Serialize};

/// Position in world space.
///
/// The grid indexes on x/y only; z still participates in distance math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a position from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Interest checks compare squared values throughout to avoid the
    /// square root.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dz.mul_add(dz, dy.mul_add(dy, dx * dx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance_squared(a), 25.0);
        assert_eq!(a.distance_squared(a), 0.0);
    }

    #[test]
    fn test_distance_squared_uses_all_axes() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 0.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
    }
}
