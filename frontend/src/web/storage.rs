//! Browser LocalStorage backend for the token manager.

use hackwell::{KeyValueStore, StorageError};

/// Handle to `window.localStorage`.
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// `None` when there is no `window` or storage access is denied
    /// (sandboxed iframes, some private modes).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}
