//! Configuration types for the ConsoleService.

/// Storage keys under which each collection is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key of the user collection. Defaults to `users`.
    pub users: String,
    /// Key of the group collection. Defaults to `groups`.
    pub groups: String,
    /// Key of the role collection. Defaults to `roles`.
    pub roles: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            users: "users".to_string(),
            groups: "groups".to_string(),
            roles: "roles".to_string(),
        }
    }
}

impl StorageKeys {
    /// Prefix every default key, e.g. `staging_users`, to keep several consoles in one store.
    pub fn with_prefix(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            users: format!("{}_{}", prefix, defaults.users),
            groups: format!("{}_{}", prefix, defaults.groups),
            roles: format!("{}_{}", prefix, defaults.roles),
        }
    }
}

/// Configuration for the ConsoleService.
#[derive(Debug, Clone, Default)]
pub struct ConsoleServiceConfig {
    /// Where each collection lives in the storage provider.
    pub keys: StorageKeys,
}

impl ConsoleServiceConfig {
    /// Create a config using the given storage keys.
    pub fn with_keys(keys: StorageKeys) -> Self {
        Self { keys }
    }
}
