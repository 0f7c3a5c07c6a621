//! The saved API key.

use crate::browser::storage::{Storage, StorageError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage key holding the API key.
pub const API_KEY_STORAGE_KEY: &str = "fw_api_key";

const KEY_PREFIX: &str = "sk-";

/// Errors saving or validating a key.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The input does not look like an API key.
    #[error("that doesn't look like a valid OpenAI key (should start with {KEY_PREFIX})")]
    InvalidFormat,

    /// The key could not be written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A validated API key. Its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trim `raw` and check it has the expected prefix.
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        let key = raw.trim();
        if key.len() <= KEY_PREFIX.len() || !key.starts_with(KEY_PREFIX) {
            return Err(CredentialError::InvalidFormat);
        }
        Ok(Self(key.to_string()))
    }

    /// The key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl FromStr for ApiKey {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"sk-***").finish()
    }
}

/// Reads and writes the API key in browser storage.
#[derive(Debug, Default)]
pub struct CredentialStore {
    storage: Storage,
}

impl CredentialStore {
    /// Store backed by `storage`.
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Store backed by localStorage.
    #[must_use]
    pub fn local() -> Self {
        Self::new(Storage::local())
    }

    /// The saved key, if one is saved and still valid.
    #[must_use]
    pub fn stored_key(&self) -> Option<ApiKey> {
        self.storage
            .get(API_KEY_STORAGE_KEY)
            .and_then(|raw| ApiKey::parse(&raw).ok())
    }

    /// Save `key`, replacing any previous one.
    pub fn store_key(&self, key: &ApiKey) -> Result<(), CredentialError> {
        self.storage.set(API_KEY_STORAGE_KEY, key.as_str())?;
        Ok(())
    }

    /// Forget the saved key.
    pub fn clear(&self) -> Result<(), CredentialError> {
        self.storage.remove(API_KEY_STORAGE_KEY)?;
        Ok(())
    }
}
