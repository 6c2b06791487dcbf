//! JSON directory provider implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::errors::StorageError;
use crate::interfaces::StorageProvider;

/// Extension of the file holding each key's value.
const FILE_EXTENSION: &str = "json";

/// Stores each key as `<data_dir>/<key>.json`.
///
/// The data directory plays the part of a single browser profile: everything
/// the console persists lives there and nowhere else. The directory is created
/// on the first write.
///
/// # Example
///
/// ```no_run
/// use admin_console_repository::{JsonDirectoryStorage, StorageProvider};
///
/// let storage = JsonDirectoryStorage::new(".admin-console");
/// storage.set_item("users", "[]")?;
/// assert_eq!(storage.get_item("users")?, Some("[]".to_string()));
/// # Ok::<(), admin_console_repository::StorageError>(())
/// ```
#[derive(Debug)]
pub struct JsonDirectoryStorage {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonDirectoryStorage {
    /// Create a provider rooted at `data_dir`. Nothing is touched on disk yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        info!(data_dir = %data_dir.display(), "Created JSON directory storage");
        Self {
            data_dir,
            write_lock: Mutex::new(()),
        }
    }

    /// The directory holding the stored files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Keys become file names, so only alphanumerics, `_` and `-` are allowed.
    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::io("Storage key cannot be empty"));
        }

        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::io(format!(
                "Storage key '{}' contains invalid characters. Only alphanumeric characters, '_' and '-' are allowed",
                key
            )));
        }

        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        Self::validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.{}", key, FILE_EXTENSION)))
    }
}

impl StorageProvider for JsonDirectoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StorageError::lock(e.to_string()))?;

        fs::create_dir_all(&self.data_dir)?;

        // Write beside the target and rename over it so readers never see a partial file.
        let tmp_path = path.with_extension(format!("{}.tmp", FILE_EXTENSION));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "Stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StorageError::lock(e.to_string()))?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
