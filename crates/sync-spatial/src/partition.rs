//! The spatial partition capability.

use sync_entity::{Dimension, Entity, EntityKey, Vec3};

/// One query result: an entity whose influence range covers the query
/// point and whose dimension is visible from the query dimension.
///
/// The squared distance is computed during the query anyway for the
/// range check, so it rides along for the caller's ranking decisions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryHit {
    /// Identity of the matching entity.
    pub key: EntityKey,
    /// Squared distance between the query point and the entity.
    pub distance_squared: f32,
}

/// An indexing strategy entities can be registered with.
///
/// All operations are synchronous and single-threaded with respect to
/// one partition instance; an embedding that shares a partition across
/// threads must supply its own mutual exclusion.
///
/// The partition never owns entity records. It reads them, inserts
/// lightweight snapshots into its own storage, and writes exactly one
/// field back: the placement cache ([`Entity::set_placement`]).
/// Mutation notifications expect the record to already hold the new
/// value; the explicit old/new arguments exist so a strategy can react
/// to the transition without re-deriving it.
pub trait SpatialPartition {
    /// Start tracking an entity at its current position and range.
    /// Entities with a range of 0 are never indexed; adding one is a
    /// no-op.
    fn add(&mut self, entity: &mut Entity);

    /// Stop tracking an entity, using its cached placement to locate
    /// its entries. Removing an entity that was never added is a
    /// benign no-op. Must be called before the record is destroyed.
    fn remove(&mut self, entity: &mut Entity);

    /// React to a position change.
    fn update_position(&mut self, entity: &mut Entity, old_position: Vec3, new_position: Vec3);

    /// React to a range change. If either the old or the new range is
    /// 0 this is a no-op: the entity either was not indexed or stops
    /// being indexable only via [`SpatialPartition::remove`].
    fn update_range(&mut self, entity: &mut Entity, old_range: u32, new_range: u32);

    /// React to a dimension change. Dimensions never influence spatial
    /// layout, only query-time filtering.
    fn update_dimension(
        &mut self,
        entity: &mut Entity,
        old_dimension: Dimension,
        new_dimension: Dimension,
    );

    /// Candidates visible from `position` in `dimension`.
    ///
    /// Returns a scratch buffer owned by the partition; the borrow must
    /// end before the next call on the same instance, which also makes
    /// the buffer reuse safe.
    fn find(&mut self, position: Vec3, dimension: Dimension) -> &[QueryHit];
}
