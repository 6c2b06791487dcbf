//! Role repository.

use std::sync::Arc;

use admin_console_shared::{EntityId, EntityKind, Role};
use tracing::{info, warn};

use crate::allocator::next_id;
use crate::errors::RepositoryError;
use crate::gateway::StorageGateway;

/// CRUD over the role collection. Names and descriptions are stored as entered.
#[derive(Clone)]
pub struct RoleRepository {
    gateway: Arc<StorageGateway>,
    key: String,
}

impl RoleRepository {
    /// Create a repository for the collection stored under `key`.
    pub fn new(gateway: Arc<StorageGateway>, key: impl Into<String>) -> Self {
        Self {
            gateway,
            key: key.into(),
        }
    }

    /// Append a new role with no assignments and persist the collection.
    pub fn create(&self, name: &str, description: &str) -> Result<Role, RepositoryError> {
        let mut roles: Vec<Role> = self.gateway.load_for_update(&self.key)?;
        let id = next_id(&roles).ok_or_else(|| {
            warn!("Role ids exhausted");
            RepositoryError::ids_exhausted(EntityKind::Role)
        })?;
        let role = Role::new(id, name, description);

        roles.push(role.clone());
        self.gateway.save(&self.key, &roles)?;

        info!(role_id = role.id, role_name = %role.name, "Role created");
        Ok(role)
    }

    /// All roles in insertion order.
    pub fn list(&self) -> Vec<Role> {
        self.gateway.load(&self.key)
    }

    /// Look up a single role.
    pub fn get(&self, id: EntityId) -> Result<Role, RepositoryError> {
        self.list()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Role, id))
    }

    /// Roles with at least one user or group assigned, in collection order.
    pub fn list_assignments(&self) -> Vec<Role> {
        self.list().into_iter().filter(Role::is_assigned).collect()
    }

    /// Apply `change` to role `id`, put it back at its position and persist.
    ///
    /// # Returns
    ///
    /// * `Ok(Role)` - The role as stored after the change
    /// * `Err(RepositoryError::NotFound)` - If no role has that id; nothing is written
    /// * `Err(RepositoryError::Storage)` - If the collection could not be read or saved
    pub fn modify<F>(&self, id: EntityId, change: F) -> Result<Role, RepositoryError>
    where
        F: FnOnce(&mut Role),
    {
        let mut roles: Vec<Role> = self.gateway.load_for_update(&self.key)?;

        let Some(role) = roles.iter_mut().find(|r| r.id == id) else {
            warn!(role_id = id, "Role not found, nothing changed");
            return Err(RepositoryError::not_found(EntityKind::Role, id));
        };
        change(role);
        let updated = role.clone();

        self.gateway.save(&self.key, &roles)?;
        Ok(updated)
    }
}
