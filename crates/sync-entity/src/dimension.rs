//! Visibility dimensions.
//!
//! Dimensions partition the world logically without affecting spatial
//! layout. Dimension 0 is the shared public world. Positive ids are
//! isolated private worlds. Negative ids are private worlds whose
//! occupants can additionally see the shared world. A separate `Global`
//! tag marks entities (server-wide markers, blips) visible from
//! everywhere.

use serde::{Deserialize, Serialize};

/// Logical visibility partition of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Visible from every dimension.
    Global,
    /// An ordinary dimension id; 0 is the shared world.
    World(i32),
}

impl Dimension {
    /// The shared public world.
    pub const SHARED: Self = Self::World(0);

    /// Wire value reserved for [`Dimension::Global`].
    pub const GLOBAL_RAW: i32 = i32::MIN;

    /// Decode a raw wire dimension, normalizing the global sentinel.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        if raw == Self::GLOBAL_RAW {
            Self::Global
        } else {
            Self::World(raw)
        }
    }

    /// Encode back to the raw wire value.
    #[must_use]
    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Global => Self::GLOBAL_RAW,
            Self::World(id) => id,
        }
    }

    /// Whether this dimension is the global tag.
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }

    /// Whether an observer in `self` can see a candidate in `target`.
    ///
    /// Global candidates are visible to everyone. Beyond that, a
    /// positive world sees only itself, a negative world sees itself and
    /// the shared world, and the shared world sees only itself. A global
    /// observer behaves like a negative world: it sees the shared world
    /// (and global candidates).
    #[must_use]
    pub const fn can_see(self, target: Self) -> bool {
        match (self, target) {
            (_, Self::Global) => true,
            (Self::Global, Self::World(t)) => t == 0,
            (Self::World(q), Self::World(t)) => {
                if q > 0 {
                    q == t
                } else if q < 0 {
                    t == 0 || q == t
                } else {
                    t == 0
                }
            }
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::SHARED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        assert_eq!(Dimension::from_raw(0), Dimension::SHARED);
        assert_eq!(Dimension::from_raw(7), Dimension::World(7));
        assert_eq!(Dimension::from_raw(i32::MIN), Dimension::Global);
        assert_eq!(Dimension::Global.to_raw(), i32::MIN);
        assert_eq!(Dimension::World(-3).to_raw(), -3);
    }

    #[test]
    fn test_positive_world_is_isolated() {
        let q = Dimension::World(5);
        assert!(q.can_see(Dimension::World(5)));
        assert!(q.can_see(Dimension::Global));
        assert!(!q.can_see(Dimension::World(7)));
        assert!(!q.can_see(Dimension::SHARED));
        assert!(!q.can_see(Dimension::World(-3)));
    }

    #[test]
    fn test_negative_world_sees_shared() {
        let q = Dimension::World(-3);
        assert!(q.can_see(Dimension::World(-3)));
        assert!(q.can_see(Dimension::SHARED));
        assert!(q.can_see(Dimension::Global));
        assert!(!q.can_see(Dimension::World(5)));
        assert!(!q.can_see(Dimension::World(-4)));
        assert!(!q.can_see(Dimension::World(7)));
    }

    #[test]
    fn test_shared_world_rejects_private() {
        let q = Dimension::SHARED;
        assert!(q.can_see(Dimension::SHARED));
        assert!(q.can_see(Dimension::Global));
        assert!(!q.can_see(Dimension::World(5)));
        assert!(!q.can_see(Dimension::World(-3)));
        assert!(!q.can_see(Dimension::World(7)));
    }

    #[test]
    fn test_global_observer_sees_shared_and_global() {
        let q = Dimension::Global;
        assert!(q.can_see(Dimension::Global));
        assert!(q.can_see(Dimension::SHARED));
        assert!(!q.can_see(Dimension::World(5)));
        assert!(!q.can_see(Dimension::World(-3)));
        assert!(!q.can_see(Dimension::World(7)));
    }
}
