//! Browser `localStorage` bindings.
//!
//! In WASM this uses the real Web Storage API. Elsewhere an in-memory map
//! stands in, so code built on it can be unit tested natively.

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
use thiserror::Error;

/// Storage error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is not available (e.g., in incognito mode)
    #[error("storage not available")]
    NotAvailable,
    /// Storage quota exceeded
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Access denied
    #[error("storage access denied")]
    AccessDenied,
}

/// Key/value browser storage backed by `localStorage`.
#[derive(Debug, Default)]
pub struct Storage {
    #[cfg(not(target_arch = "wasm32"))]
    memory: std::sync::Mutex<HashMap<String, String>>,
}

impl Storage {
    /// Create a localStorage instance.
    #[must_use]
    pub fn local() -> Self {
        Self::default()
    }

    /// Get a value from storage.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.web_storage()?.get_item(key).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().ok()?.get(key).cloned()
        }
    }

    /// Set a value in storage.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.web_storage()
                .ok_or(StorageError::NotAvailable)?
                .set_item(key, value)
                .map_err(|_| StorageError::QuotaExceeded)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Remove a value from storage.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.web_storage()
                .ok_or(StorageError::NotAvailable)?
                .remove_item(key)
                .map_err(|_| StorageError::AccessDenied)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .remove(key);
            Ok(())
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn web_storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_set_get() {
        let storage = Storage::local();
        storage.set("test_key", "test_value").unwrap();
        assert_eq!(storage.get("test_key"), Some("test_value".to_string()));
    }

    #[test]
    fn test_storage_get_nonexistent() {
        assert_eq!(Storage::local().get("nonexistent"), None);
    }

    #[test]
    fn test_storage_overwrite_and_remove() {
        let storage = Storage::local();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("two"));
        storage.remove("k").unwrap();
        assert!(storage.get("k").is_none());
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_storage_error_display() {
        assert_eq!(StorageError::NotAvailable.to_string(), "storage not available");
        assert_eq!(StorageError::QuotaExceeded.to_string(), "storage quota exceeded");
    }
}
