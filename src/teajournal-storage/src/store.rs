//! Key/value string store.
//!
//! `ListStore` keeps string values by key and persists the whole map as a
//! single JSON object. Lists are stored JSON-encoded inside the string
//! values, so a value can be corrupted independently of its neighbours;
//! list reads therefore never fail, they degrade to an empty list.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, StorageError};

/// Read access to persisted string lists.
///
/// Implementations must tolerate a missing key and malformed content by
/// returning an empty list.
pub trait ListSource {
    /// Read the list stored under `key`.
    fn get_list(&self, key: &str) -> Vec<String>;
}

/// File-backed key/value store.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    /// Backing file, `None` for an in-memory store
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
}

impl ListStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// A file that is not a JSON object of strings is logged and treated as
    /// empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(items) => items,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Store file is malformed, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = items.len(), "Store opened");
        Ok(Self {
            path: Some(path),
            items,
        })
    }

    /// Create a store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the raw value stored under `key`.
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store a raw value and persist.
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.items.insert(key.into(), value.into());
        self.persist()
    }

    /// Remove a value and persist. Returns the previous value.
    pub fn remove_item(&mut self, key: &str) -> Result<Option<String>> {
        let previous = self.items.remove(key);
        if previous.is_some() {
            self.persist()?;
        }
        Ok(previous)
    }

    /// Decode the JSON value under `key`, or `T::default()` when the key is
    /// missing or the content does not decode.
    pub fn get_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.items.get(key) else {
            return T::default();
        };
        match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Malformed stored value, using default");
                T::default()
            }
        }
    }

    /// Encode `value` as JSON under `key` and persist.
    pub fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, raw)
    }

    /// Replace the list stored under `key`.
    pub fn set_list(&mut self, key: &str, values: &[String]) -> Result<()> {
        self.set_json(key, values)
    }

    /// Append `value` to the list under `key` unless already present.
    ///
    /// Returns `true` if the value was added.
    pub fn add_unique(&mut self, key: &str, value: &str) -> Result<bool> {
        let mut values = self.get_list(key);
        if values.iter().any(|v| v == value) {
            return Ok(false);
        }
        values.push(value.to_string());
        self.set_list(key, &values)?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let parent = path
            .parent()
            .ok_or_else(|| StorageError::InvalidPath(path.clone()))?;
        std::fs::create_dir_all(parent)?;

        // Readers never see a partial file.
        let tmp = path.with_extension("json.tmp");
        let mut file = std::fs::File::create(&tmp)?;
        serde_json::to_writer_pretty(&mut file, &self.items)?;
        file.flush()?;
        file.sync_all()?;
        std::fs::rename(&tmp, path)?;

        debug!(path = %path.display(), "Store saved");
        Ok(())
    }
}

impl ListSource for ListStore {
    fn get_list(&self, key: &str) -> Vec<String> {
        self.get_json::<Vec<String>>(key)
    }
}
