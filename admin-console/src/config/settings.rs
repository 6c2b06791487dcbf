//! Environment-driven settings.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::errors::ConsoleError;

/// Default data directory for `file` storage.
const DEFAULT_DATA_DIR: &str = ".admin-console";

/// Where the console keeps its collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// One JSON file per collection under the data directory.
    File,
    /// Process-local storage, lost on exit.
    Memory,
}

impl StorageMode {
    /// Parse storage mode from the `CONSOLE_STORAGE` environment variable.
    ///
    /// Valid values: "file" or "memory" (case-insensitive)
    /// Defaults to "file" if not set or invalid.
    pub fn from_env() -> Self {
        match env::var("CONSOLE_STORAGE")
            .unwrap_or_else(|_| "file".to_string())
            .to_lowercase()
            .as_str()
        {
            "file" | "files" | "json" => Self::File,
            "memory" | "mem" => Self::Memory,
            _ => {
                warn!("Invalid CONSOLE_STORAGE, defaulting to 'file'");
                Self::File
            }
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, multi-line output.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse log format from the `CONSOLE_LOG_FORMAT` environment variable.
    ///
    /// Valid values: "pretty" or "json" (case-insensitive)
    /// Defaults to "pretty" if not set or invalid. Read before the subscriber
    /// exists, so an invalid value is not logged.
    pub fn from_env() -> Self {
        match env::var("CONSOLE_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub storage_mode: StorageMode,
    pub data_dir: PathBuf,
    /// Prefix applied to every storage key, if any.
    pub key_prefix: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_mode: StorageMode::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            key_prefix: None,
        }
    }
}

impl Settings {
    /// Read the storage settings from environment variables.
    ///
    /// `CONSOLE_LOG_FORMAT` is read separately by [`LogFormat::from_env`], before
    /// the subscriber that would report these settings exists.
    ///
    /// # Environment Variables
    ///
    /// - `CONSOLE_STORAGE`: Storage mode - "file" or "memory" (default: file)
    /// - `CONSOLE_DATA_DIR`: Data directory for file storage (default: .admin-console)
    /// - `CONSOLE_KEY_PREFIX`: Optional prefix for the storage keys
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - The parsed settings
    /// * `Err(ConsoleError)` - If the key prefix cannot be used as a storage key
    pub fn from_env() -> Result<Self, ConsoleError> {
        let data_dir = env::var("CONSOLE_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let key_prefix = env::var("CONSOLE_KEY_PREFIX")
            .ok()
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty());

        if let Some(prefix) = &key_prefix {
            Self::validate_prefix(prefix)?;
        }

        Ok(Self {
            storage_mode: StorageMode::from_env(),
            data_dir: PathBuf::from(data_dir),
            key_prefix,
        })
    }

    fn validate_prefix(prefix: &str) -> Result<(), ConsoleError> {
        if prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            Ok(())
        } else {
            Err(ConsoleError::config(format!(
                "CONSOLE_KEY_PREFIX '{}' may only contain alphanumeric characters, '_' and '-'",
                prefix
            )))
        }
    }
}
