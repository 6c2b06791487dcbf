//! Error types for the admin console repository.
//!
//! `StorageError` covers the key-value backend; `RepositoryError` is what the
//! entity repositories and relationship manager return.

mod repository_error;
mod storage_error;

pub use repository_error::RepositoryError;
pub use storage_error::StorageError;
