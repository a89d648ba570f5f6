//! `use_draft_persistence`: mirror a form's state into `localStorage`.
//!
//! DESIGN
//! ======
//! `sitekit::drafts::DraftPersistence` owns the debounce and restore rules
//! against an explicit clock. The hook adds the reactive wiring:
//!
//! - The first run of the tracking effect restores the stored draft and hands
//!   it to `on_restore`. That run never schedules a write.
//! - Every later change of `data` reschedules the pending write and replaces
//!   the single `gloo-timers` handle, which cancels the previous timer.
//! - Cleanup drops the timer and disposes the core, so nothing is written
//!   after unmount.
//!
//! Status flags are mirrored into a signal after every core call. The effect
//! and timer bodies are [`track_change`] and [`fire_timer`].

#[cfg(test)]
#[path = "draft_persistence_test.rs"]
mod draft_persistence_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sitekit::drafts::{DraftOptions, DraftPersistence, DraftStatus};
use sitekit::store::KeyValueStore;

use crate::util::browser_store::BrowserStore;
#[cfg(feature = "hydrate")]
use crate::util::clock::{delay_until, now_ms};

type Core<T> = DraftPersistence<BrowserStore, T>;

/// Handle returned by [`use_draft_persistence`].
pub struct DraftHandle<T: Send + Sync + 'static> {
    core: StoredValue<Core<T>, LocalStorage>,
    status: RwSignal<DraftStatus>,
    data: Signal<T>,
}

impl<T: Send + Sync + 'static> Clone for DraftHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DraftHandle<T> {}

impl<T> DraftHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Reactive status flags.
    pub fn status(&self) -> ReadSignal<DraftStatus> {
        self.status.read_only()
    }

    pub fn draft_restored(&self) -> bool {
        self.status.get().draft_restored
    }

    pub fn is_saving(&self) -> bool {
        self.status.get().is_saving
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.status.get().has_unsaved_changes
    }

    /// Delete the stored draft and drop any pending write.
    pub fn clear_draft(&self) {
        self.core.try_update_value(Core::clear);
        self.sync();
    }

    /// Write the current data immediately.
    pub fn save_draft(&self) {
        let data = self.data.get_untracked();
        self.core.try_update_value(|core| core.save_now(&data));
        self.sync();
    }

    fn sync(&self) {
        if let Some(status) = self.core.try_with_value(Core::status) {
            self.status.set(status);
        }
    }
}

/// Feed one run of the tracking effect into the core.
///
/// The first run resolves the restore and returns the stored draft, if any;
/// it never schedules a write. Later runs reschedule the debounced write.
pub fn track_change<S, T>(core: &mut DraftPersistence<S, T>, value: &T, now_ms: f64) -> Option<T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned + Clone,
{
    if core.is_restore_resolved() {
        core.persist(value, now_ms);
        None
    } else {
        core.restore(value)
    }
}

/// Timer body: perform the write that was due at `due_ms`.
///
/// Browsers may fire a timeout slightly early, so the tick never uses a time
/// before the deadline.
pub fn fire_timer<S, T>(core: &mut DraftPersistence<S, T>, due_ms: f64, now_ms: f64) -> bool
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned + Clone,
{
    core.tick(now_ms.max(due_ms))
}

/// Persist `data` under `options.key` while the calling component is mounted.
///
/// `on_restore`, when given, receives a previously stored draft once, on
/// mount. A disabled instance never reads or writes storage.
pub fn use_draft_persistence<T>(
    data: Signal<T>,
    options: DraftOptions,
    on_restore: Option<Callback<T>>,
) -> DraftHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let core = StoredValue::new_local(DraftPersistence::new(BrowserStore::local(), options));
    let status = RwSignal::new(DraftStatus::default());
    let handle = DraftHandle { core, status, data };

    #[cfg(feature = "hydrate")]
    {
        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

        Effect::new(move || {
            let value = data.get();
            let Some(restored) = core.try_update_value(|core| track_change(core, &value, now_ms())) else {
                return;
            };
            handle.sync();
            schedule(core, status, timer);
            if let (Some(draft), Some(on_restore)) = (restored, on_restore) {
                on_restore.run(draft);
            }
        });

        on_cleanup(move || {
            timer.try_set_value(None);
            core.try_update_value(Core::dispose);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_restore;
    }

    handle
}

/// Point the timer at the core's pending deadline, replacing any previous one.
#[cfg(feature = "hydrate")]
fn schedule<T>(
    core: StoredValue<Core<T>, LocalStorage>,
    status: RwSignal<DraftStatus>,
    timer: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
) where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let Some(deadline) = core.try_with_value(Core::next_deadline) else {
        return;
    };
    let next = deadline.map(|due| {
        gloo_timers::callback::Timeout::new(delay_until(due, now_ms()), move || {
            core.try_update_value(|core| fire_timer(core, due, now_ms()));
            if let Some(next) = core.try_with_value(Core::status) {
                status.set(next);
            }
        })
    });
    timer.try_set_value(next);
}
