//! Key/value storage seam behind the credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backend is `window.localStorage`, shared by every page
//! and tab of the origin. Native builds and tests use `MemoryStore`, whose
//! clones share one map the same way two tabs share one origin.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Storage failure. Reads swallow these; writes report them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected {op} of {key}: {reason}")]
    Rejected {
        op: &'static str,
        key: String,
        reason: String,
    },
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key/value store with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` means the key is not set.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend refuses the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend refuses the write (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend refuses the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` for the current origin.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    /// Open the origin's local storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when there is no window or the
    /// browser blocks storage access.
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
fn rejected(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected {
        op,
        key: key.to_owned(),
        reason: format!("{err:?}"),
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| rejected("read", key, &e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| rejected("write", key, &e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| rejected("remove", key, &e))
    }
}
