//! Repository error types.

use admin_console_shared::{EntityId, EntityKind};
use thiserror::Error;

use super::StorageError;

/// Errors returned by the entity repositories and the relationship manager.
///
/// A lookup miss is reported as `NotFound` and leaves the stored collection
/// untouched, so callers that ignore it observe a no-op.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No entity with the given id exists in its collection.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: EntityId },

    /// The collection's last id is the largest representable one.
    #[error("No {entity} id left after {max}", max = EntityId::MAX)]
    IdsExhausted { entity: EntityKind },

    /// Reading or persisting the collection failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RepositoryError {
    /// Create a not found error.
    pub fn not_found(entity: EntityKind, id: EntityId) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create an id exhaustion error.
    pub fn ids_exhausted(entity: EntityKind) -> Self {
        Self::IdsExhausted { entity }
    }

    /// Whether this error is a lookup miss rather than a storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
