//! Interface definitions for the storage backend.
//!
//! This module defines the `StorageProvider` trait that is injected into the
//! storage gateway so tests can supply in-memory fakes.

mod storage_provider;

pub use storage_provider::StorageProvider;
