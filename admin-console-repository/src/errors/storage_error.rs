//! Storage backend error types.

use thiserror::Error;

/// Errors raised by a `StorageProvider` or while encoding a collection.
///
/// Reads never surface these to repository callers: the gateway degrades a
/// failed or malformed read to an empty collection. Writes do.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A collection could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The in-process lock guarding the store was poisoned.
    #[error("Lock error: {0}")]
    LockError(String),
}

impl StorageError {
    /// Create an I/O error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a lock error.
    pub fn lock(msg: impl Into<String>) -> Self {
        Self::LockError(msg.into())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
