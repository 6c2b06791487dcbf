//! Identity types shared by every persisted entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of a persisted entity.
///
/// Identifiers are positive and unique within their own collection only; a user
/// and a group may share the same numeric id.
pub type EntityId = u64;

/// The kind of entity stored in a collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Group,
    Role,
}

impl EntityKind {
    /// Prefix used when rendering a display ID (`US001`, `GP001`, `RL001`).
    pub fn display_prefix(&self) -> &'static str {
        match self {
            EntityKind::User => "US",
            EntityKind::Group => "GP",
            EntityKind::Role => "RL",
        }
    }

    /// Render the display ID for `id`, zero-padded to at least three digits.
    ///
    /// # Example
    ///
    /// ```
    /// use admin_console_shared::EntityKind;
    ///
    /// assert_eq!(EntityKind::User.display_id(7), "US007");
    /// assert_eq!(EntityKind::Role.display_id(1234), "RL1234");
    /// ```
    pub fn display_id(&self, id: EntityId) -> String {
        format!("{}{:03}", self.display_prefix(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Group => write!(f, "group"),
            EntityKind::Role => write!(f, "role"),
        }
    }
}

/// Implemented by every entity that lives in an id-ordered collection.
pub trait Identified {
    /// The kind of collection this entity belongs to.
    const KIND: EntityKind;

    /// The entity's id within its collection.
    fn id(&self) -> EntityId;

    /// The display ID rendered in tables (e.g. `US001`).
    fn display_id(&self) -> String {
        Self::KIND.display_id(self.id())
    }
}
