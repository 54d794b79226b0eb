//! Entity identity.
//!
//! Identity is the `(id, kind)` pair: different categories of game object
//! (players, vehicles, markers, ...) draw ids from independent number
//! spaces, so neither half alone is unique.

use serde::{Deserialize, Serialize};

/// Category of a tracked object (player, vehicle, marker, ...).
///
/// The spatial layer is agnostic to what a kind means; it only
/// participates in identity comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKind(pub u16);

/// Unique identity of one tracked entity within a partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    /// Id within the kind's number space.
    pub id: u64,
    /// Category the id belongs to.
    pub kind: EntityKind,
}

impl EntityKey {
    /// Create a key from its parts.
    #[must_use]
    pub const fn new(id: u64, kind: EntityKind) -> Self {
        Self { id, kind }
    }
}
