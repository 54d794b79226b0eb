//! Entity records for interest management.
//!
//! A tracked entity is a plain mutable record: identity (`id` + kind),
//! a 3D position, an influence range, and a visibility dimension. The
//! spatial partition that indexes the entity writes one extra field on
//! the record, its current cell placement, and nothing else.
//!
//! Records are owned by whatever subsystem spawns them (an object pool,
//! an ECS, a test). The partition only ever borrows them.

pub mod dimension;
pub mod entity;
pub mod id;
pub mod position;

pub use dimension::Dimension;
pub use entity::{Entity, Placement};
pub use id::{EntityKey, EntityKind};
pub use position::Vec3;
