//! Group repository.

use std::sync::Arc;

use admin_console_shared::{EntityId, EntityKind, Group};
use tracing::{info, warn};

use crate::allocator::next_id;
use crate::errors::RepositoryError;
use crate::gateway::StorageGateway;

/// CRUD over the group collection. Group names are stored as entered.
#[derive(Clone)]
pub struct GroupRepository {
    gateway: Arc<StorageGateway>,
    key: String,
}

impl GroupRepository {
    /// Create a repository for the collection stored under `key`.
    pub fn new(gateway: Arc<StorageGateway>, key: impl Into<String>) -> Self {
        Self {
            gateway,
            key: key.into(),
        }
    }

    /// Append a new group with no members and persist the collection.
    pub fn create(&self, group_name: &str) -> Result<Group, RepositoryError> {
        let mut groups: Vec<Group> = self.gateway.load_for_update(&self.key)?;
        let id = next_id(&groups).ok_or_else(|| {
            warn!("Group ids exhausted");
            RepositoryError::ids_exhausted(EntityKind::Group)
        })?;
        let group = Group::new(id, group_name);

        groups.push(group.clone());
        self.gateway.save(&self.key, &groups)?;

        info!(group_id = group.id, group_name = %group.group_name, "Group created");
        Ok(group)
    }

    /// All groups in insertion order.
    pub fn list(&self) -> Vec<Group> {
        self.gateway.load(&self.key)
    }

    /// Look up a single group.
    pub fn get(&self, id: EntityId) -> Result<Group, RepositoryError> {
        self.list()
            .into_iter()
            .find(|g| g.id == id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Group, id))
    }

    /// Apply `change` to group `id`, put it back at its position and persist.
    ///
    /// # Returns
    ///
    /// * `Ok(Group)` - The group as stored after the change
    /// * `Err(RepositoryError::NotFound)` - If no group has that id; nothing is written
    /// * `Err(RepositoryError::Storage)` - If the collection could not be read or saved
    pub fn modify<F>(&self, id: EntityId, change: F) -> Result<Group, RepositoryError>
    where
        F: FnOnce(&mut Group),
    {
        let mut groups: Vec<Group> = self.gateway.load_for_update(&self.key)?;

        let Some(group) = groups.iter_mut().find(|g| g.id == id) else {
            warn!(group_id = id, "Group not found, nothing changed");
            return Err(RepositoryError::not_found(EntityKind::Group, id));
        };
        change(group);
        let updated = group.clone();

        self.gateway.save(&self.key, &groups)?;
        Ok(updated)
    }
}
