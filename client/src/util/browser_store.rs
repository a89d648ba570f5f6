//! Web storage adapters for the `sitekit` key-value seam.
//!
//! `localStorage` holds form drafts; `sessionStorage` holds the initial-load
//! marker. Storage can be missing (SSR, disabled cookies, some private modes),
//! in which case every call reports [`StoreError::Unavailable`] and callers
//! log and carry on.

#[cfg(test)]
#[path = "browser_store_test.rs"]
mod browser_store_test;

use sitekit::store::{KeyValueStore, StoreError};

/// Which browser storage area a [`BrowserStore`] talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives browser restarts; scoped to the profile.
    Local,
    /// Cleared when the tab session ends.
    Session,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.map_err(|_| StoreError::Unavailable)?.ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?
                .get_item(key)
                .map_err(|e| StoreError::Read { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Write { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?
                .remove_item(key)
                .map_err(|e| StoreError::Remove { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
