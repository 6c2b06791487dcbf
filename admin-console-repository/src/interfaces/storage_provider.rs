//! Storage provider trait definition.
//!
//! This module defines the raw key-value interface the storage gateway is built
//! on, allowing different backends (in-memory, JSON files on disk, ...).

use crate::errors::StorageError;

/// Abstracts the persistent key-value store holding the console's collections.
///
/// Values are opaque strings; the gateway owns JSON encoding. Implementations
/// are injected into `StorageGateway`, which is the only caller. A key maps to
/// exactly one value and `set_item` overwrites whatever was stored before.
///
/// Methods take `&self`; implementations keep any mutable state behind their
/// own lock so the provider can be shared.
pub trait StorageProvider: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - If the key is present
    /// * `Ok(None)` - If the key has never been written (or was removed)
    /// * `Err(StorageError)` - If the backend could not be read
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the value is durably stored
    /// * `Err(StorageError)` - If the write fails
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<P: StorageProvider + ?Sized> StorageProvider for std::sync::Arc<P> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
