use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use crate::{config, error::StorageError};

pub const PREFERENCES_FILE: &str = "preferences.json";

/// Small persistent key-value store backed by a JSON object file.
///
/// Every mutation is written through to disk before it returns.
pub struct Preferences {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Preferences {
    /// Loads the store from the default location in the local data directory.
    pub async fn load() -> Result<Self, StorageError> {
        Self::load_from(config::data_dir().join(PREFERENCES_FILE)).await
    }

    /// Loads the store from `path`. A missing file reads as an empty store.
    pub async fn load_from(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match async_fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        Ok(Self { path, entries })
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be written; the store then
    /// keeps its previous contents.
    pub async fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist().await {
            // keep memory and disk in agreement
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Deletes `key`. Removing a key that is not set is a no-op and does not
    /// touch the file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be written.
    pub async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.persist().await?;
        }
        Ok(())
    }

    /// Location of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
