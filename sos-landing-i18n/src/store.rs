//! Language-preference persistence
//!
//! A small key-value store abstraction over the platform config directory.
//! Failures are explicit (`Result`), never panics; the caller decides how to
//! degrade (the language context treats every failure as "no preference").

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Storage layer error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// Platform config directory could not be determined
    #[error("config directory unavailable")]
    ConfigDirUnavailable,

    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file exists but does not parse
    #[error("malformed preference file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// In-memory store lock poisoned
    #[error("store lock poisoned")]
    Poisoned,
}

/// Preference store trait
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// Shared stores stay usable behind an Arc.
impl<T: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// File-backed store: a flat JSON string map under the platform config
/// directory (`<config>/sos-landing/preferences.json`).
pub struct LocalPreferenceStore {
    path: PathBuf,
}

impl LocalPreferenceStore {
    /// Store at the default platform location.
    pub fn new() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::ConfigDirUnavailable)?;
        Ok(Self {
            path: dir.join("sos-landing").join("preferences.json"),
        })
    }

    /// Store at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is not worth failing a write over; start fresh.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Malformed(_)) => HashMap::new(),
            Err(err) => return Err(err),
        };
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// In-memory store, for tests and environments without a config directory.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn local_store_round_trip() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let store = LocalPreferenceStore::with_path(tmp.path().join("prefs.json"));

        assert!(store.get("battle-royale-language").unwrap().is_none());
        store.set("battle-royale-language", "rus").unwrap();
        assert_eq!(
            store.get("battle-royale-language").unwrap().as_deref(),
            Some("rus")
        );
    }

    #[test]
    fn local_store_missing_file_is_empty() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let store = LocalPreferenceStore::with_path(tmp.path().join("nope").join("prefs.json"));
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn local_store_corrupt_file_errors_on_read_and_recovers_on_write() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = LocalPreferenceStore::with_path(path);
        assert!(matches!(store.get("k"), Err(StoreError::Malformed(_))));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
