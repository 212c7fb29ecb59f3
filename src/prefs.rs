//! Persisted visitor preferences.
//!
//! The site keeps exactly one preference: the last-chosen language code,
//! stored under [`LANGUAGE_STORAGE_KEY`]. [`FileStore`] mirrors
//! browser-local-storage semantics on disk: reads and writes are best-effort
//! and IO failures degrade to "no stored value" with a warning rather than
//! an error.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage key for the active language code.
pub const LANGUAGE_STORAGE_KEY: &str = "site_language";

/// Key-value preference storage.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// Volatile store for tests and previews.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a language preference.
    pub fn with_language(code: &str) -> Self {
        let mut store = Self::new();
        store.set(LANGUAGE_STORAGE_KEY, code);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one small JSON object, write-through on set.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing values. A missing or
    /// unreadable file starts the store empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map
                    .into_iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                    .collect(),
                Ok(_) | Err(_) => {
                    warn!("Preference file {} is not a JSON object, ignoring", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, values }
    }

    fn persist(&self) {
        let map: serde_json::Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        let payload = Value::Object(map).to_string();
        if let Err(e) = std::fs::write(&self.path, payload) {
            warn!("Failed to persist preferences to {}: {}", self.path.display(), e);
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}
