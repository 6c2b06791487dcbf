//! Group records.

use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Identified};

/// A persisted group.
///
/// `users` holds user display names, not ids. Renaming or deleting a user does
/// not touch the names stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: EntityId,
    pub group_name: String,
    #[serde(default)]
    pub users: Vec<String>,
}

impl Group {
    /// Create a group with an empty membership list. The name is stored as given.
    pub fn new(id: EntityId, group_name: impl Into<String>) -> Self {
        Self {
            id,
            group_name: group_name.into(),
            users: Vec::new(),
        }
    }
}

impl Identified for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn id(&self) -> EntityId {
        self.id
    }
}
