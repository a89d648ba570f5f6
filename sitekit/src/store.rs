//! Key-value storage seam.
//!
//! DESIGN
//! ======
//! Browser `localStorage` and `sessionStorage` are synchronous and mutate
//! through a shared handle, so the trait takes `&self` everywhere. The client
//! crate implements it over `web_sys::Storage`; [`MemoryStore`] backs tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Error returned by [`KeyValueStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage medium is reachable (SSR, disabled storage, private mode).
    #[error("storage is unavailable")]
    Unavailable,
    /// Reading `key` failed.
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    /// Writing `key` failed, e.g. quota exceeded.
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    /// Removing `key` failed.
    #[error("failed to remove {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`. `Ok(None)` means no entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the entry for `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the delete is rejected.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Access counters recorded by [`MemoryStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreAccess {
    pub reads: usize,
    pub writes: usize,
    pub removes: usize,
}

impl StoreAccess {
    /// Total number of operations of any kind.
    #[must_use]
    pub fn total(self) -> usize {
        self.reads + self.writes + self.removes
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    access: StoreAccess,
    fail_writes: bool,
    fail_removes: bool,
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`. Seeding is not counted as access.
    #[must_use]
    pub fn seeded<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.borrow_mut();
            for (key, value) in entries {
                inner.entries.insert(key.to_owned(), value.to_owned());
            }
        }
        store
    }

    /// Read an entry without counting it as access.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Whether an entry exists for `key`, without counting access.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    #[must_use]
    pub fn access(&self) -> StoreAccess {
        self.inner.borrow().access
    }

    /// Make subsequent writes fail, simulating an exceeded quota.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Make subsequent removes fail.
    pub fn fail_removes(&self, fail: bool) {
        self.inner.borrow_mut().fail_removes = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.access.reads += 1;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.access.writes += 1;
        if inner.fail_writes {
            return Err(StoreError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.access.removes += 1;
        if inner.fail_removes {
            return Err(StoreError::Remove { key: key.to_owned(), reason: "storage disabled".to_owned() });
        }
        inner.entries.remove(key);
        Ok(())
    }
}
