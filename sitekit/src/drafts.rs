//! Debounced form draft persistence.
//!
//! DESIGN
//! ======
//! One [`DraftPersistence`] mirrors one form's in-memory value to a durable
//! key-value store under a caller-chosen key. The lifecycle is:
//!
//! 1. [`DraftPersistence::restore`] runs once per mount and hands back a stored
//!    draft, if one parses.
//! 2. Every later change goes through [`DraftPersistence::persist`], which
//!    replaces the single pending write and pushes its deadline out by the
//!    debounce window. Only the last change in a quiet period is written.
//! 3. The host calls [`DraftPersistence::tick`] when the deadline passes, and
//!    [`DraftPersistence::dispose`] on unmount so nothing is written afterwards.
//!
//! ERROR HANDLING
//! ==============
//! Drafts are a best-effort local cache. Storage and encoding failures are
//! logged and the status flags still settle, so a form never sits in a
//! permanent "saving" state. A draft that fails to parse is deleted and
//! treated as absent.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts::DEFAULT_DEBOUNCE_MS;
use crate::store::{KeyValueStore, StoreError};

/// Error raised by draft storage internals. Never returned from public operations.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to encode draft: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("corrupted draft under {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-instance configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftOptions {
    /// Storage key. Must be unique per logical document, e.g. include an entity id.
    pub key: String,
    pub debounce_ms: f64,
    /// When false the instance never touches storage.
    pub enabled: bool,
}

impl DraftOptions {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), debounce_ms: DEFAULT_DEBOUNCE_MS, enabled: true }
    }

    #[must_use]
    pub fn debounce_ms(mut self, debounce_ms: f64) -> Self {
        self.debounce_ms = debounce_ms.max(0.0);
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Flags exposed to the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DraftStatus {
    /// A stored draft existed at mount and was handed back.
    pub draft_restored: bool,
    /// A debounced write is pending.
    pub is_saving: bool,
    /// A draft has been restored or written since mount (or the last clear).
    pub has_unsaved_changes: bool,
}

#[derive(Debug)]
struct PendingWrite<T> {
    data: T,
    due_ms: f64,
}

pub struct DraftPersistence<S, T> {
    store: S,
    options: DraftOptions,
    status: DraftStatus,
    restored_once: bool,
    baseline: Option<T>,
    pending: Option<PendingWrite<T>>,
}

impl<S, T> DraftPersistence<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned + Clone,
{
    #[must_use]
    pub fn new(store: S, options: DraftOptions) -> Self {
        Self { store, options, status: DraftStatus::default(), restored_once: false, baseline: None, pending: None }
    }

    /// Look up a stored draft. Runs once; later calls return `None`.
    ///
    /// `current` is the form's initial value and becomes the baseline when no
    /// draft is found.
    pub fn restore(&mut self, current: &T) -> Option<T> {
        if !self.options.enabled || self.restored_once {
            return None;
        }
        self.restored_once = true;

        match self.read_draft() {
            Ok(Some(draft)) => {
                log::debug!("restored draft {}", self.options.key);
                self.status.draft_restored = true;
                self.status.has_unsaved_changes = true;
                Some(draft)
            }
            Ok(None) => {
                self.baseline = Some(current.clone());
                None
            }
            Err(e @ DraftError::Decode { .. }) => {
                log::warn!("discarding draft: {e}");
                if let Err(e) = self.store.remove(&self.options.key) {
                    log::warn!("failed to remove corrupted draft {}: {e}", self.options.key);
                }
                self.baseline = Some(current.clone());
                None
            }
            Err(e) => {
                log::warn!("failed to read draft {}: {e}", self.options.key);
                self.baseline = Some(current.clone());
                None
            }
        }
    }

    /// Schedule a write of `data`, replacing any pending one.
    ///
    /// Ignored until [`Self::restore`] has run, so the initial value can never
    /// overwrite a draft that is about to be restored.
    pub fn persist(&mut self, data: &T, now_ms: f64) {
        if !self.options.enabled || !self.restored_once {
            return;
        }
        self.pending = Some(PendingWrite { data: data.clone(), due_ms: now_ms + self.options.debounce_ms });
        self.status.is_saving = true;
    }

    /// Perform the pending write if its deadline has passed. Returns whether a
    /// write was attempted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms) {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        match self.write(&pending.data) {
            Ok(()) => self.status.has_unsaved_changes = true,
            Err(e) => log::warn!("failed to save draft {}: {e}", self.options.key),
        }
        self.status.is_saving = false;
        true
    }

    /// Deadline of the pending write, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    /// Write `data` immediately, superseding any pending write.
    pub fn save_now(&mut self, data: &T) {
        if !self.options.enabled {
            return;
        }
        self.cancel_pending();
        if let Err(e) = self.write(data) {
            log::warn!("failed to save draft {}: {e}", self.options.key);
        }
        self.status.has_unsaved_changes = true;
    }

    /// Delete the stored draft and any pending write.
    pub fn clear(&mut self) {
        if !self.options.enabled {
            return;
        }
        self.cancel_pending();
        if let Err(e) = self.store.remove(&self.options.key) {
            log::warn!("failed to clear draft {}: {e}", self.options.key);
        }
        self.status.has_unsaved_changes = false;
        self.status.draft_restored = false;
    }

    /// Drop any pending write. Call on unmount.
    pub fn dispose(&mut self) {
        self.cancel_pending();
    }

    #[must_use]
    pub fn status(&self) -> DraftStatus {
        self.status
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.options.key
    }

    /// Value the form started from when no draft was restored.
    #[must_use]
    pub fn baseline(&self) -> Option<&T> {
        self.baseline.as_ref()
    }

    /// Whether the restore phase has resolved.
    #[must_use]
    pub fn is_restore_resolved(&self) -> bool {
        self.restored_once
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.status.is_saving = false;
        }
    }

    fn read_draft(&self) -> Result<Option<T>, DraftError> {
        let Some(raw) = self.store.get(&self.options.key)? else {
            return Ok(None);
        };
        let draft = serde_json::from_str(&raw)
            .map_err(|source| DraftError::Decode { key: self.options.key.clone(), source })?;
        Ok(Some(draft))
    }

    fn write(&self, data: &T) -> Result<(), DraftError> {
        let raw = serde_json::to_string(data).map_err(DraftError::Encode)?;
        self.store.set(&self.options.key, &raw)?;
        Ok(())
    }
}
