//! Console service implementation.
//!
//! This module provides the main entry point the front end talks to. It wires
//! the repositories and the relationship manager onto a single storage gateway.

use std::sync::Arc;

use admin_console_shared::{EntityId, Group, Role, User, UserFields};

use crate::config::ConsoleServiceConfig;
use crate::errors::RepositoryError;
use crate::gateway::StorageGateway;
use crate::interfaces::StorageProvider;
use crate::relationships::RelationshipManager;
use crate::repositories::{GroupRepository, RoleRepository, UserRepository};
use crate::types::SelectOptions;

/// The main service for managing users, groups and roles.
///
/// Every mutating call is one synchronous read-modify-write and returns the
/// updated entity; listing calls return the full collection so the caller can
/// re-render. Lookup misses come back as `RepositoryError::NotFound` with the
/// stored data untouched.
///
/// # Example
///
/// ```
/// use admin_console_repository::{ConsoleService, MemoryStorage};
/// use admin_console_shared::UserFields;
///
/// let service = ConsoleService::new(Box::new(MemoryStorage::new()));
///
/// let user = service.create_user(&UserFields::new("  Ar  un ", "arun@example.com", "Arun", "K"))?;
/// assert_eq!(user.id, 1);
/// assert_eq!(user.user_name, "Ar un");
///
/// let group = service.create_group("Group 1")?;
/// let group = service.add_users_to_group(group.id, &["Ar un"])?;
/// assert_eq!(group.users, vec!["Ar un".to_string()]);
/// # Ok::<(), admin_console_repository::RepositoryError>(())
/// ```
pub struct ConsoleService {
    users: UserRepository,
    groups: GroupRepository,
    roles: RoleRepository,
    relationships: RelationshipManager,
    config: ConsoleServiceConfig,
}

impl ConsoleService {
    /// Create a new ConsoleService with the default storage keys.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `StorageProvider` (e.g., `JsonDirectoryStorage`)
    pub fn new(provider: Box<dyn StorageProvider>) -> Self {
        Self::with_config(provider, ConsoleServiceConfig::default())
    }

    /// Create a new ConsoleService with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `StorageProvider`
    /// * `config` - Custom configuration for the service
    pub fn with_config(provider: Box<dyn StorageProvider>, config: ConsoleServiceConfig) -> Self {
        let gateway = Arc::new(StorageGateway::new(provider));
        let users = UserRepository::new(gateway.clone(), config.keys.users.clone());
        let groups = GroupRepository::new(gateway.clone(), config.keys.groups.clone());
        let roles = RoleRepository::new(gateway, config.keys.roles.clone());
        let relationships = RelationshipManager::new(users.clone(), groups.clone(), roles.clone());

        Self {
            users,
            groups,
            roles,
            relationships,
            config,
        }
    }

    pub fn config(&self) -> &ConsoleServiceConfig {
        &self.config
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn groups(&self) -> &GroupRepository {
        &self.groups
    }

    pub fn roles(&self) -> &RoleRepository {
        &self.roles
    }

    pub fn relationships(&self) -> &RelationshipManager {
        &self.relationships
    }

    // Users

    pub fn create_user(&self, fields: &UserFields) -> Result<User, RepositoryError> {
        self.users.create(fields)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn get_user(&self, id: EntityId) -> Result<User, RepositoryError> {
        self.users.get(id)
    }

    pub fn update_user(&self, id: EntityId, fields: &UserFields) -> Result<User, RepositoryError> {
        self.users.update(id, fields)
    }

    /// Delete user `id`. The caller must have obtained confirmation first.
    pub fn delete_user(&self, id: EntityId) -> Result<User, RepositoryError> {
        self.users.delete(id)
    }

    // Groups

    pub fn create_group(&self, group_name: &str) -> Result<Group, RepositoryError> {
        self.groups.create(group_name)
    }

    pub fn list_groups(&self) -> Vec<Group> {
        self.groups.list()
    }

    pub fn get_group(&self, id: EntityId) -> Result<Group, RepositoryError> {
        self.groups.get(id)
    }

    pub fn add_users_to_group<S: AsRef<str>>(
        &self,
        group_id: EntityId,
        user_names: &[S],
    ) -> Result<Group, RepositoryError> {
        self.relationships.add_users_to_group(group_id, user_names)
    }

    pub fn remove_users_from_group<S: AsRef<str>>(
        &self,
        group_id: EntityId,
        user_names: &[S],
    ) -> Result<Group, RepositoryError> {
        self.relationships.remove_users_from_group(group_id, user_names)
    }

    pub fn user_options_for_group(&self, group_id: EntityId) -> Result<SelectOptions, RepositoryError> {
        self.relationships.user_options_for_group(group_id)
    }

    pub fn member_options_for_group(
        &self,
        group_id: EntityId,
    ) -> Result<SelectOptions, RepositoryError> {
        self.relationships.member_options_for_group(group_id)
    }

    // Roles

    pub fn create_role(&self, name: &str, description: &str) -> Result<Role, RepositoryError> {
        self.roles.create(name, description)
    }

    pub fn list_roles(&self) -> Vec<Role> {
        self.roles.list()
    }

    pub fn get_role(&self, id: EntityId) -> Result<Role, RepositoryError> {
        self.roles.get(id)
    }

    pub fn assign_users_to_role<S: AsRef<str>>(
        &self,
        role_id: EntityId,
        user_names: &[S],
    ) -> Result<Role, RepositoryError> {
        self.relationships.assign_users_to_role(role_id, user_names)
    }

    pub fn assign_groups_to_role<S: AsRef<str>>(
        &self,
        role_id: EntityId,
        group_names: &[S],
    ) -> Result<Role, RepositoryError> {
        self.relationships.assign_groups_to_role(role_id, group_names)
    }

    /// Roles with at least one user or group assigned.
    pub fn list_assignments(&self) -> Vec<Role> {
        self.roles.list_assignments()
    }

    pub fn user_options(&self) -> SelectOptions {
        self.relationships.user_options()
    }

    pub fn group_options(&self) -> SelectOptions {
        self.relationships.group_options()
    }
}
