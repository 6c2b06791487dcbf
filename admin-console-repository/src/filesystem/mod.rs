//! Filesystem implementation of the storage provider.
//!
//! This module provides `JsonDirectoryStorage`, which keeps each key in its own
//! JSON file under a data directory.

mod provider;

pub use provider::JsonDirectoryStorage;
