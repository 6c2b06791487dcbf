//! User repository.

use std::sync::Arc;

use admin_console_shared::{EntityId, EntityKind, User, UserFields};
use tracing::{info, warn};

use crate::allocator::next_id;
use crate::errors::RepositoryError;
use crate::gateway::StorageGateway;

/// CRUD over the user collection.
///
/// Every text field is normalised (trimmed, whitespace runs collapsed) before
/// it is stored, on create and on update alike.
#[derive(Clone)]
pub struct UserRepository {
    gateway: Arc<StorageGateway>,
    key: String,
}

impl UserRepository {
    /// Create a repository for the collection stored under `key`.
    pub fn new(gateway: Arc<StorageGateway>, key: impl Into<String>) -> Self {
        Self {
            gateway,
            key: key.into(),
        }
    }

    /// Append a new user built from `fields` and persist the collection.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored record, with its allocated id
    /// * `Err(RepositoryError::IdsExhausted)` - If the last stored id cannot be incremented
    /// * `Err(RepositoryError::Storage)` - If the collection could not be read or saved
    pub fn create(&self, fields: &UserFields) -> Result<User, RepositoryError> {
        let mut users: Vec<User> = self.gateway.load_for_update(&self.key)?;
        let id = next_id(&users).ok_or_else(|| {
            warn!("User ids exhausted");
            RepositoryError::ids_exhausted(EntityKind::User)
        })?;
        let user = User::new(id, fields);

        users.push(user.clone());
        self.gateway.save(&self.key, &users)?;

        info!(user_id = user.id, user_name = %user.user_name, "User created");
        Ok(user)
    }

    /// All users in insertion order. Empty when nothing has been stored yet.
    pub fn list(&self) -> Vec<User> {
        self.gateway.load(&self.key)
    }

    /// Look up a single user, e.g. to pre-fill the edit form.
    pub fn get(&self, id: EntityId) -> Result<User, RepositoryError> {
        self.list()
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::User, id))
    }

    /// Overwrite the text fields of user `id` in place and persist.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The updated record
    /// * `Err(RepositoryError::NotFound)` - If no user has that id; nothing is written
    /// * `Err(RepositoryError::Storage)` - If the collection could not be read or saved
    pub fn update(&self, id: EntityId, fields: &UserFields) -> Result<User, RepositoryError> {
        let mut users: Vec<User> = self.gateway.load_for_update(&self.key)?;

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            warn!(user_id = id, "Update skipped, user not found");
            return Err(RepositoryError::not_found(EntityKind::User, id));
        };
        user.apply(fields);
        let updated = user.clone();

        self.gateway.save(&self.key, &users)?;

        info!(user_id = id, user_name = %updated.user_name, "User updated");
        Ok(updated)
    }

    /// Remove user `id` and persist.
    ///
    /// Confirmation is the caller's job; this removes unconditionally. Group
    /// and role lists keep whatever names they hold.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The removed record
    /// * `Err(RepositoryError::NotFound)` - If no user has that id; nothing is written
    /// * `Err(RepositoryError::Storage)` - If the collection could not be read or saved
    pub fn delete(&self, id: EntityId) -> Result<User, RepositoryError> {
        let users: Vec<User> = self.gateway.load_for_update(&self.key)?;

        let Some(removed) = users.iter().find(|u| u.id == id).cloned() else {
            warn!(user_id = id, "Delete skipped, user not found");
            return Err(RepositoryError::not_found(EntityKind::User, id));
        };
        let remaining: Vec<User> = users.into_iter().filter(|u| u.id != id).collect();

        self.gateway.save(&self.key, &remaining)?;

        info!(user_id = id, user_name = %removed.user_name, "User deleted");
        Ok(removed)
    }
}
