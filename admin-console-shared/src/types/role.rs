//! Role records.

use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Identified};

/// A persisted role.
///
/// Roles are plain records; nothing enforces them as permissions. Assignments
/// are stored as user and group display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub assigned_users: Vec<String>,
    #[serde(default)]
    pub assigned_groups: Vec<String>,
}

impl Role {
    /// Create a role with no assignments. Name and description are stored as given.
    pub fn new(id: EntityId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            assigned_users: Vec::new(),
            assigned_groups: Vec::new(),
        }
    }

    /// Whether the role has at least one user or group assigned.
    pub fn is_assigned(&self) -> bool {
        !self.assigned_users.is_empty() || !self.assigned_groups.is_empty()
    }
}

impl Identified for Role {
    const KIND: EntityKind = EntityKind::Role;

    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_is_unassigned() {
        let role = Role::new(1, "Role 1", "First role");
        assert!(!role.is_assigned());
        assert_eq!(role.display_id(), "RL001");
    }

    #[test]
    fn test_is_assigned_with_groups_only() {
        let mut role = Role::new(1, "Role 1", "");
        role.assigned_groups.push("Group 1".to_string());
        assert!(role.is_assigned());
    }

    #[test]
    fn test_legacy_record_without_assigned_groups() {
        let role: Role = serde_json::from_str(
            r#"{"id":2,"name":"Admin","description":"All access","assignedUsers":["Arun"]}"#,
        )
        .unwrap();

        assert_eq!(role.assigned_users, vec!["Arun".to_string()]);
        assert!(role.assigned_groups.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let role = Role::new(1, "Role 1", "desc");
        let json = serde_json::to_value(&role).unwrap();
        assert!(json["assignedUsers"].is_array());
        assert!(json["assignedGroups"].is_array());
    }
}
