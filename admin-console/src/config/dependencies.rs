//! Dependency initialization and wiring for the admin console.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use admin_console_repository::{
    ConsoleService, ConsoleServiceConfig, JsonDirectoryStorage, MemoryStorage, StorageKeys,
    StorageProvider,
};

use super::settings::{Settings, StorageMode};
use crate::errors::ConsoleError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The service every command runs against.
    pub service: Arc<ConsoleService>,
    /// The settings the service was built from.
    pub settings: Settings,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See [`Settings::from_env`] for the variables read.
    pub fn new() -> Result<Self, ConsoleError> {
        Self::from_settings(Settings::from_env()?)
    }

    /// Initialize all dependencies from already parsed settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ConsoleError)` - If the data directory path is taken by a regular file
    pub fn from_settings(settings: Settings) -> Result<Self, ConsoleError> {
        info!(
            storage_mode = ?settings.storage_mode,
            data_dir = %settings.data_dir.display(),
            key_prefix = ?settings.key_prefix,
            "Initializing dependencies"
        );

        let provider: Box<dyn StorageProvider> = match settings.storage_mode {
            StorageMode::File => Box::new(Self::open_data_dir(&settings.data_dir)?),
            StorageMode::Memory => {
                warn!("Using in-memory storage, changes are lost on exit");
                Box::new(MemoryStorage::new())
            }
        };

        let keys = match &settings.key_prefix {
            Some(prefix) => StorageKeys::with_prefix(prefix),
            None => StorageKeys::default(),
        };
        let service = ConsoleService::with_config(provider, ConsoleServiceConfig::with_keys(keys));

        Ok(Self {
            service: Arc::new(service),
            settings,
        })
    }

    fn open_data_dir(data_dir: &Path) -> Result<JsonDirectoryStorage, ConsoleError> {
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(ConsoleError::config(format!(
                "CONSOLE_DATA_DIR '{}' exists and is not a directory",
                data_dir.display()
            )));
        }
        Ok(JsonDirectoryStorage::new(data_dir))
    }
}
