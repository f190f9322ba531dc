//! Key-value persistence for page state.
//!
//! Pages talk to [`KeyValueStore`] instead of `window.localStorage` directly so the
//! read/write contract can be exercised without a browser.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("failed to encode value for '{key}': {message}")]
    Encode { key: String, message: String },
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_string(), message: js_message(e) })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_string(), message: js_message(e) })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write { key: key.to_string(), message: js_message(e) })
    }
}

#[cfg(test)]
pub use memory::{BrokenStore, MemoryStore};


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));

        store.remove_item("k").unwrap();
        assert_eq!(store.raw("k"), None);
    }

    #[test]
    fn error_messages_name_the_key() {
        let err = StorageError::Write { key: "team".into(), message: "quota".into() };
        assert_eq!(err.to_string(), "failed to write 'team': quota");
    }
}
