//! Durable key-value storage behind an injectable interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `localStorage` is origin-scoped ambient state. Draft logic
//! only ever sees a [`DurableStore`], so native tests run against
//! [`MemoryStore`] and the hydrate build plugs in [`BrowserStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::UiError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Text key-value store that survives page reloads.
///
/// Single-threaded by contract: implementations use interior mutability and
/// take `&self` so the store can be shared between event handlers.
pub trait DurableStore {
    /// Read the text stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;

    /// Overwrite the text stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// In-memory store used by native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    reads: RefCell<Vec<String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Keys passed to [`DurableStore::get`], in call order.
    pub fn read_log(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    /// Keys passed to [`DurableStore::set`], in call order.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.reads.borrow_mut().push(key.to_owned());
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.writes.borrow_mut().push(key.to_owned());
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, resolved on every call.
///
/// Storage can be disabled per origin or revoked mid-session, so each access
/// re-resolves it and maps any failure to [`UiError::StoreUnavailable`].
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, UiError> {
        let window = web_sys::window().ok_or_else(|| UiError::StoreUnavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(UiError::StoreUnavailable("localStorage disabled".to_owned())),
            Err(e) => Err(UiError::store(e)),
        }
    }
}

#[cfg(feature = "hydrate")]
impl DurableStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Self::storage()?.get_item(key).map_err(UiError::store)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(UiError::store)
    }
}
