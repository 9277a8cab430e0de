//! Key-value persistence for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session owner reads and writes through [`KeyValueStore`] so the same
//! code runs against `window.localStorage` in the browser and an in-memory
//! map in native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Map-backed store for tests and non-browser builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `window.localStorage`. Writes are best-effort: quota and privacy-mode
/// failures are logged and otherwise ignored.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; {key} not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write {key} failed: {e:?}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::storage()
            && let Err(e) = storage.remove_item(key)
        {
            log::warn!("localStorage remove {key} failed: {e:?}");
        }
    }
}

/// The store the running app persists to.
#[cfg(feature = "csr")]
pub fn app_store() -> BrowserStorage {
    BrowserStorage
}

/// The store the running app persists to.
#[cfg(not(feature = "csr"))]
pub fn app_store() -> MemoryStorage {
    MemoryStorage::new()
}

/// Load and decode a JSON value. Missing keys and malformed JSON read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("stored {key} is not valid JSON: {e}");
            None
        }
    }
}

/// Encode and save a JSON value.
pub fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::warn!("encode {key} failed: {e}"),
    }
}
