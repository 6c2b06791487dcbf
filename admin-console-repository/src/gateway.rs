//! Typed access to the collections held by a `StorageProvider`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::StorageError;
use crate::interfaces::StorageProvider;

/// Loads and saves whole collections as JSON arrays under a key.
///
/// An absent key or a value that is not a JSON array of `T` reads as an empty
/// collection. A failed backend read is only forgiven by [`StorageGateway::load`];
/// mutations go through [`StorageGateway::load_for_update`], which reports it so
/// that stored data is never overwritten from a read that did not happen.
/// Writes serialize the full collection and overwrite the prior value.
pub struct StorageGateway {
    provider: Box<dyn StorageProvider>,
}

impl StorageGateway {
    /// Create a gateway over `provider`.
    pub fn new(provider: Box<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// Load the collection stored under `key` for display, or an empty one.
    ///
    /// A failed backend read is logged and shown as empty. Never use the result
    /// as the base of a write; see [`StorageGateway::load_for_update`].
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.load_for_update(key) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read stored collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Load the collection stored under `key` as the base of a read-modify-write.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<T>)` - The stored items; empty if the key is absent or the value is malformed
    /// * `Err(StorageError)` - If the backend read failed, so the caller must not save
    pub fn load_for_update<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        let Some(raw) = self.provider.get_item(key)? else {
            debug!(key = %key, "No stored collection, starting empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                debug!(key = %key, count = items.len(), "Loaded collection");
                Ok(items)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Stored collection is malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize `items` and store them under `key`, replacing the previous collection.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.provider.set_item(key, &raw)?;
        debug!(key = %key, count = items.len(), "Saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use admin_console_shared::{Group, User, UserFields};

    /// Provider whose every operation fails.
    struct BrokenStorage;

    impl StorageProvider for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::io("Mock failure"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::io("Mock failure"))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::io("Mock failure"))
        }
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let gateway = StorageGateway::new(Box::new(MemoryStorage::new()));
        let users: Vec<User> = gateway.load("users");
        assert!(users.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let gateway = StorageGateway::new(Box::new(MemoryStorage::new()));
        let users = vec![
            User::new(1, &UserFields::new("Arun", "a@x.io", "Arun", "K")),
            User::new(2, &UserFields::new("user2", "u@x.io", "User", "Two")),
        ];

        gateway.save("users", &users).unwrap();
        let loaded: Vec<User> = gateway.load("users");

        assert_eq!(loaded, users);
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let gateway = StorageGateway::new(Box::new(MemoryStorage::with_items([(
            "users",
            "{not json",
        )])));
        let users: Vec<User> = gateway.load("users");
        assert!(users.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let gateway = StorageGateway::new(Box::new(MemoryStorage::with_items([
            ("groups", r#"{"id":1}"#),
            ("users", "null"),
        ])));
        let groups: Vec<Group> = gateway.load("groups");
        let users: Vec<User> = gateway.load("users");
        assert!(groups.is_empty());
        assert!(users.is_empty());
    }

    #[test]
    fn test_read_failure_shows_empty_but_blocks_updates() {
        let gateway = StorageGateway::new(Box::new(BrokenStorage));

        let groups: Vec<Group> = gateway.load("groups");
        assert!(groups.is_empty());

        let result = gateway.load_for_update::<Group>("groups");
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }

    #[test]
    fn test_load_for_update_forgives_absent_and_malformed() {
        let gateway = StorageGateway::new(Box::new(MemoryStorage::with_items([(
            "users",
            "{not json",
        )])));

        assert!(gateway.load_for_update::<User>("users").unwrap().is_empty());
        assert!(gateway.load_for_update::<Group>("groups").unwrap().is_empty());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let gateway = StorageGateway::new(Box::new(BrokenStorage));
        let result = gateway.save("groups", &[Group::new(1, "Group 1")]);
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }

    #[test]
    fn test_wire_format_matches_stored_layout() {
        let storage = std::sync::Arc::new(MemoryStorage::new());
        let gateway = StorageGateway::new(Box::new(storage.clone()));

        gateway.save("groups", &[Group::new(1, "Group 1")]).unwrap();

        assert_eq!(
            storage.get_item("groups").unwrap().unwrap(),
            r#"[{"id":1,"groupName":"Group 1","users":[]}]"#
        );
    }
}
