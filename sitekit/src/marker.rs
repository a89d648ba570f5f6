//! Session-scoped "initial load complete" marker.
//!
//! The marker lives in session storage, so it survives reloads within a tab
//! but not a new browsing session. The gate reads it once at mount and writes
//! it when the first gated load completes.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use crate::consts::{SESSION_MARKER_KEY, SESSION_MARKER_VALUE};
use crate::store::KeyValueStore;

pub struct SessionMarker<S> {
    store: S,
}

impl<S: KeyValueStore> SessionMarker<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff no marker exists. Unreadable storage counts as an initial load.
    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        match self.store.get(SESSION_MARKER_KEY) {
            Ok(value) => value.is_none(),
            Err(e) => {
                log::warn!("session marker unreadable, gating this load: {e}");
                true
            }
        }
    }

    /// Record that the initial load of this session has completed.
    pub fn mark_complete(&self) {
        if let Err(e) = self.store.set(SESSION_MARKER_KEY, SESSION_MARKER_VALUE) {
            log::warn!("failed to persist session marker: {e}");
        }
    }

    /// Forget the marker so the next load is gated again.
    pub fn reset(&self) {
        if let Err(e) = self.store.remove(SESSION_MARKER_KEY) {
            log::warn!("failed to clear session marker: {e}");
        }
    }
}
