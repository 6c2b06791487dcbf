//! # Admin Console Repository
//!
//! This crate provides the storage gateway, the user, group and role
//! repositories and the relationship manager behind the admin console. It
//! includes definitions for errors, the storage provider interface, and
//! in-memory and JSON-directory implementations of it.

pub mod allocator;
pub mod config;
pub mod errors;
pub mod filesystem;
pub mod gateway;
pub mod interfaces;
pub mod memory;
pub mod relationships;
pub mod repositories;
pub mod service;
pub mod types;

pub use allocator::next_id;
pub use config::{ConsoleServiceConfig, StorageKeys};
pub use errors::{RepositoryError, StorageError};
pub use filesystem::JsonDirectoryStorage;
pub use gateway::StorageGateway;
pub use interfaces::StorageProvider;
pub use memory::MemoryStorage;
pub use relationships::{difference_names, union_names, RelationshipManager};
pub use repositories::{GroupRepository, RoleRepository, UserRepository};
pub use service::ConsoleService;
pub use types::{SelectOption, SelectOptions};
