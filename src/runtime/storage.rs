//! Persistent key/value storage for drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drafts live in the browser's `localStorage` under one key per form. The
//! trait keeps the web-sys glue in one place; [`MemoryStore`] stands in for
//! it off-browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::UiError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;
    /// Store `value`, replacing anything under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
    fn remove(&self, key: &str) -> Result<(), UiError>;
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, UiError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Save `value` as JSON under `key`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), UiError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store. Clones share the same entries, like tabs sharing an origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the origin's local storage.
    pub fn open() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(UiError::StorageUnavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
fn js_storage_error(err: &wasm_bindgen::JsValue) -> UiError {
    UiError::Storage(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.storage.get_item(key).map_err(|e| js_storage_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage.set_item(key, value).map_err(|e| js_storage_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.storage.remove_item(key).map_err(|e| js_storage_error(&e))
    }
}
