//! Membership (user ↔ group) and assignment (role ↔ user, role ↔ group) edges.
//!
//! Edges are stored as display-name strings inside the group or role record,
//! with set semantics: a name appears at most once per list. Names are not
//! checked against the user or group collections.

use admin_console_shared::{EntityId, Group, Role};
use tracing::info;

use crate::errors::RepositoryError;
use crate::repositories::{GroupRepository, RoleRepository, UserRepository};
use crate::types::SelectOptions;

/// Union of `existing` and `selected`, keeping each name once.
///
/// Order is the existing names first, then new names in selection order.
pub fn union_names<S: AsRef<str>>(existing: &[String], selected: &[S]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + selected.len());
    let candidates = existing
        .iter()
        .map(String::as_str)
        .chain(selected.iter().map(AsRef::as_ref));

    for name in candidates {
        if !merged.iter().any(|m| m == name) {
            merged.push(name.to_string());
        }
    }
    merged
}

/// `existing` minus every name in `selected`, keeping the remaining order.
pub fn difference_names<S: AsRef<str>>(existing: &[String], selected: &[S]) -> Vec<String> {
    let mut remaining: Vec<String> = Vec::with_capacity(existing.len());
    for name in existing {
        let removed = selected.iter().any(|s| s.as_ref() == name);
        if !removed && !remaining.contains(name) {
            remaining.push(name.clone());
        }
    }
    remaining
}

/// Adds and removes edges between users, groups and roles.
#[derive(Clone)]
pub struct RelationshipManager {
    users: UserRepository,
    groups: GroupRepository,
    roles: RoleRepository,
}

impl RelationshipManager {
    pub fn new(users: UserRepository, groups: GroupRepository, roles: RoleRepository) -> Self {
        Self {
            users,
            groups,
            roles,
        }
    }

    /// Add `user_names` to group `group_id`'s members.
    ///
    /// Adding a name that is already a member changes nothing.
    pub fn add_users_to_group<S: AsRef<str>>(
        &self,
        group_id: EntityId,
        user_names: &[S],
    ) -> Result<Group, RepositoryError> {
        let group = self.groups.modify(group_id, |group| {
            group.users = union_names(&group.users, user_names);
        })?;

        info!(group_id, members = group.users.len(), "Users added to group");
        Ok(group)
    }

    /// Remove `user_names` from group `group_id`'s members.
    ///
    /// Names that are not members are ignored.
    pub fn remove_users_from_group<S: AsRef<str>>(
        &self,
        group_id: EntityId,
        user_names: &[S],
    ) -> Result<Group, RepositoryError> {
        let group = self.groups.modify(group_id, |group| {
            group.users = difference_names(&group.users, user_names);
        })?;

        info!(group_id, members = group.users.len(), "Users removed from group");
        Ok(group)
    }

    /// Assign role `role_id` to `user_names`.
    pub fn assign_users_to_role<S: AsRef<str>>(
        &self,
        role_id: EntityId,
        user_names: &[S],
    ) -> Result<Role, RepositoryError> {
        let role = self.roles.modify(role_id, |role| {
            role.assigned_users = union_names(&role.assigned_users, user_names);
        })?;

        info!(role_id, assigned_users = role.assigned_users.len(), "Role assigned to users");
        Ok(role)
    }

    /// Assign role `role_id` to `group_names`.
    pub fn assign_groups_to_role<S: AsRef<str>>(
        &self,
        role_id: EntityId,
        group_names: &[S],
    ) -> Result<Role, RepositoryError> {
        let role = self.roles.modify(role_id, |role| {
            role.assigned_groups = union_names(&role.assigned_groups, group_names);
        })?;

        info!(role_id, assigned_groups = role.assigned_groups.len(), "Role assigned to groups");
        Ok(role)
    }

    /// Options for adding users to group `group_id`: every stored user name.
    ///
    /// Users already in the group are still offered; re-adding them is a no-op.
    pub fn user_options_for_group(&self, group_id: EntityId) -> Result<SelectOptions, RepositoryError> {
        self.groups.get(group_id)?;
        Ok(self.user_options())
    }

    /// Options for removing users from group `group_id`: its current members.
    pub fn member_options_for_group(
        &self,
        group_id: EntityId,
    ) -> Result<SelectOptions, RepositoryError> {
        let group = self.groups.get(group_id)?;
        Ok(SelectOptions::from_labels(group.users))
    }

    /// Options for assigning a role to users: every stored user name.
    pub fn user_options(&self) -> SelectOptions {
        SelectOptions::from_entities(self.users.list().into_iter().map(|u| (u.id, u.user_name)))
    }

    /// Options for assigning a role to groups: every stored group name.
    pub fn group_options(&self) -> SelectOptions {
        SelectOptions::from_entities(
            self.groups
                .list()
                .into_iter()
                .map(|g| (g.id, g.group_name)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::StorageGateway;
    use crate::memory::MemoryStorage;
    use admin_console_shared::UserFields;
    use std::sync::Arc;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn manager() -> (RelationshipManager, UserRepository, GroupRepository, RoleRepository) {
        let gateway = Arc::new(StorageGateway::new(Box::new(MemoryStorage::new())));
        let users = UserRepository::new(gateway.clone(), "users");
        let groups = GroupRepository::new(gateway.clone(), "groups");
        let roles = RoleRepository::new(gateway, "roles");
        (
            RelationshipManager::new(users.clone(), groups.clone(), roles.clone()),
            users,
            groups,
            roles,
        )
    }

    #[test]
    fn test_union_keeps_existing_then_new_order() {
        let merged = union_names(&names(&["b", "a"]), &["c", "a", "d", "c"]);
        assert_eq!(merged, names(&["b", "a", "c", "d"]));
    }

    #[test]
    fn test_union_is_idempotent() {
        let once = union_names(&[], &["A"]);
        let twice = union_names(&once, &["A"]);
        assert_eq!(twice, names(&["A"]));
    }

    #[test]
    fn test_difference() {
        let remaining = difference_names(&names(&["a", "b", "c"]), &["b", "zzz"]);
        assert_eq!(remaining, names(&["a", "c"]));
    }

    #[test]
    fn test_group_membership_scenario() {
        let (manager, users, groups, _) = manager();
        assert_eq!(users.create(&UserFields::new("Arun", "a@x.io", "Arun", "K")).unwrap().id, 1);
        assert_eq!(users.create(&UserFields::new("user2", "u@x.io", "U", "Two")).unwrap().id, 2);
        let group = groups.create("Group 1").unwrap();
        assert!(group.users.is_empty());

        let group = manager.add_users_to_group(group.id, &["Arun", "user2"]).unwrap();
        assert_eq!(group.users, names(&["Arun", "user2"]));

        let group = manager.add_users_to_group(group.id, &["Arun"]).unwrap();
        assert_eq!(group.users, names(&["Arun", "user2"]));
        assert_eq!(groups.get(1).unwrap().users, names(&["Arun", "user2"]));
    }

    #[test]
    fn test_remove_then_add_restores_membership() {
        let (manager, _, groups, _) = manager();
        groups.create("Group 1").unwrap();
        manager.add_users_to_group(1, &["a", "b", "c"]).unwrap();

        manager.remove_users_from_group(1, &["a", "b"]).unwrap();
        let group = manager.add_users_to_group(1, &["a", "b"]).unwrap();

        let mut members = group.users.clone();
        members.sort();
        assert_eq!(members, names(&["a", "b", "c"]));
        assert_eq!(group.users, names(&["c", "a", "b"]));
    }

    #[test]
    fn test_add_to_absent_group() {
        let (manager, _, groups, _) = manager();
        assert!(manager
            .add_users_to_group(1, &["Arun"])
            .unwrap_err()
            .is_not_found());
        assert!(groups.list().is_empty());
    }

    #[test]
    fn test_role_assignment_scenario() {
        let (manager, _, _, roles) = manager();
        roles.create("Role 1", "").unwrap();
        roles.create("Role 2", "").unwrap();
        assert!(roles.list_assignments().is_empty());

        manager.assign_users_to_role(1, &["User 1"]).unwrap();

        let assigned = roles.list_assignments();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].name, "Role 1");
        assert_eq!(assigned[0].assigned_users, names(&["User 1"]));
    }

    #[test]
    fn test_assign_groups_deduplicates() {
        let (manager, _, _, roles) = manager();
        roles.create("Role 1", "").unwrap();

        manager.assign_groups_to_role(1, &["Ops", "Dev"]).unwrap();
        let role = manager.assign_groups_to_role(1, &["Dev", "QA"]).unwrap();

        assert_eq!(role.assigned_groups, names(&["Ops", "Dev", "QA"]));
        assert!(role.assigned_users.is_empty());
    }

    #[test]
    fn test_stale_names_survive_user_rename_and_delete() {
        let (manager, users, groups, _) = manager();
        users.create(&UserFields::new("Arun", "", "", "")).unwrap();
        groups.create("Group 1").unwrap();
        manager.add_users_to_group(1, &["Arun"]).unwrap();

        users.update(1, &UserFields::new("Arun K", "", "", "")).unwrap();
        assert_eq!(groups.get(1).unwrap().users, names(&["Arun"]));

        users.delete(1).unwrap();
        assert_eq!(groups.get(1).unwrap().users, names(&["Arun"]));
    }

    #[test]
    fn test_options() {
        let (manager, users, groups, _) = manager();
        assert!(!manager.user_options().can_submit());
        assert!(!manager.group_options().can_submit());

        users.create(&UserFields::new("Arun", "", "", "")).unwrap();
        groups.create("Group 1").unwrap();

        assert_eq!(manager.user_options().labels(), vec!["Arun"]);
        assert_eq!(manager.group_options().labels(), vec!["Group 1"]);
        assert!(manager.user_options_for_group(1).unwrap().can_submit());
        assert!(!manager.member_options_for_group(1).unwrap().can_submit());

        manager.add_users_to_group(1, &["Arun"]).unwrap();
        assert_eq!(manager.member_options_for_group(1).unwrap().labels(), vec!["Arun"]);
        assert!(manager.member_options_for_group(2).unwrap_err().is_not_found());
    }
}
