//! This module defines the core entity types persisted by the admin console.
//! It re-exports `User`, `Group` and `Role` along with the identity helpers they share.

pub mod entity;
pub mod group;
pub mod role;
pub mod user;

pub use entity::{EntityId, EntityKind, Identified};
pub use group::Group;
pub use role::Role;
pub use user::{User, UserFields};
