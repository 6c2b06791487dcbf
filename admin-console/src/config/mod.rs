//! Configuration and dependency initialization for the admin console.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{LogFormat, Settings, StorageMode};
