//! Durable key-value storage for session credentials.
//!
//! The session keeps exactly two entries: [`TOKEN_KEY`] holds the raw bearer
//! token and [`USER_KEY`] the JSON-serialized user record. Both are removed
//! together on logout or 401 teardown.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ApiError, Result};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Durable string key-value storage.
///
/// Implementations must tolerate concurrent calls from multiple threads.
pub trait CredentialStore: Send + Sync {
    /// Read a value, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| ApiError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| ApiError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| ApiError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// The whole map is rewritten on every mutation; credential files hold two
/// short strings, so the simplicity wins over incremental writes.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileCredentialStore {
    /// Open a store at `path`, loading existing entries if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| ApiError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| ApiError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| ApiError::LockPoisoned)?;
        entries.remove(key);
        self.persist(&entries)
    }
}
