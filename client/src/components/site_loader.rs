//! Site loader gate: keep content hidden until page images are preloaded.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::Document` renders a static `#initial-loader` screen and a `#root`
//! container with the `loading-hidden` class. On the first load of a tab
//! session this component keeps both in place until the preload tracker
//! reports that loading is over, then fades the screen out, reveals the
//! content, and writes the session marker. Later loads in the same session
//! reveal immediately.
//!
//! DESIGN
//! ======
//! All decisions live in `sitekit::loader::LoadSession`. The session is
//! started from an effect, never during hydration, because removing static
//! markup while the hydration walk is pending would desync it. The fade timer
//! is a single `gloo-timers` handle that is dropped on cleanup. The effect
//! and timer bodies are [`advance_session`], [`tick_session`], and
//! [`apply_effects`].

#[cfg(test)]
#[path = "site_loader_test.rs"]
mod site_loader_test;

use leptos::prelude::*;
use sitekit::consts::{DEFAULT_FALLBACK_TIMEOUT_MS, DEFAULT_MIN_DISPLAY_TIME_MS, TRANSITION_DURATION_MS};
use sitekit::loader::{LoadSession, LoaderEffect, LoaderPhase};
use sitekit::marker::SessionMarker;
use sitekit::preload::{PreloadConfig, PreloadProgress};
use sitekit::store::KeyValueStore;

use crate::state::site::SiteState;
use crate::util::dom_handles::{self, DomAction};
use crate::util::image_preload::use_image_preload;

#[cfg(feature = "hydrate")]
use crate::util::browser_store::BrowserStore;
#[cfg(feature = "hydrate")]
use crate::util::clock::{delay_until, now_ms};

/// Tracker configuration for a gate instance.
pub fn gate_config(fallback_timeout_ms: f64, min_display_time_ms: f64, is_initial_load: bool) -> PreloadConfig {
    PreloadConfig { fallback_timeout_ms, min_display_time_ms, skip: !is_initial_load }
}

/// Text shown under the progress bar.
pub fn progress_label(progress: &PreloadProgress) -> String {
    if progress.total_images == 0 {
        return "Loading".to_owned();
    }
    format!("Loading {}/{}", progress.loaded_images, progress.total_images)
}

/// Gate effect body: start the session on the first run, then feed it the
/// tracker's loading flag.
pub fn advance_session(
    slot: &mut Option<LoadSession>,
    is_initial_load: bool,
    is_loading: bool,
    now_ms: f64,
) -> Vec<LoaderEffect> {
    let mut effects = Vec::new();
    let current = slot.get_or_insert_with(|| {
        let (started, initial) = LoadSession::start(is_initial_load, now_ms, TRANSITION_DURATION_MS);
        effects.extend(initial);
        started
    });
    effects.extend(current.observe(is_loading, now_ms));
    effects
}

/// Fade timer body. Never ticks before the deadline it was armed for.
pub fn tick_session(slot: &mut Option<LoadSession>, due_ms: f64, now_ms: f64) -> Vec<LoaderEffect> {
    slot.as_mut().map(|current| current.tick(now_ms.max(due_ms))).unwrap_or_default()
}

/// Route gate effects: the completion marker goes to `marker`, the rest to
/// the DOM through `apply_dom`.
pub fn apply_effects<S: KeyValueStore>(
    effects: &[LoaderEffect],
    marker: &SessionMarker<S>,
    mut apply_dom: impl FnMut(DomAction),
) {
    for &effect in effects {
        if effect == LoaderEffect::MarkSessionComplete {
            marker.mark_complete();
        } else if let Some(action) = dom_handles::dom_action(effect) {
            apply_dom(action);
        }
    }
}

/// Render `children`, gated on image preloading for the first load of a session.
#[component]
pub fn SiteLoader(
    children: Children,
    /// Upper bound on how long the gate may block.
    #[prop(default = DEFAULT_FALLBACK_TIMEOUT_MS)]
    fallback_timeout_ms: f64,
    /// Minimum time the loader stays up.
    #[prop(default = DEFAULT_MIN_DISPLAY_TIME_MS)]
    min_display_time_ms: f64,
) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let is_initial_load = read_initial_load();
    let sources = Signal::derive(move || site.with(SiteState::preload_sources));
    let progress = use_image_preload(sources, gate_config(fallback_timeout_ms, min_display_time_ms, is_initial_load));
    let session = RwSignal::new(None::<LoadSession>);

    #[cfg(feature = "hydrate")]
    {
        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

        Effect::new(move || {
            let is_loading = progress.get().is_loading;
            let now = now_ms();
            let mut effects = Vec::new();
            session.update(|slot| effects = advance_session(slot, is_initial_load, is_loading, now));
            apply_browser_effects(&effects);
            schedule_tick(session, timer);
        });

        on_cleanup(move || {
            timer.try_set_value(None);
        });
    }

    let overlay_visible = move || session.with(|s| s.as_ref().is_some_and(LoadSession::is_visible));
    let fading = move || session.with(|s| s.as_ref().is_some_and(|s| s.phase() == LoaderPhase::Completing));
    let percent = move || format!("{:.0}", progress.get().percent());

    view! {
        <Show when=overlay_visible>
            <div
                class="site-loader"
                class:site-loader--fading=fading
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=percent
            >
                <div class="site-loader__bar" style:width=move || format!("{}%", percent())></div>
                <span class="site-loader__label">{move || progress_label(&progress.get())}</span>
            </div>
        </Show>
        {children()}
    }
}

fn read_initial_load() -> bool {
    #[cfg(feature = "hydrate")]
    {
        SessionMarker::new(BrowserStore::session()).is_initial_load()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

#[cfg(feature = "hydrate")]
fn apply_browser_effects(effects: &[LoaderEffect]) {
    apply_effects(effects, &SessionMarker::new(BrowserStore::session()), dom_handles::apply);
}

/// Arm the fade timer for the session's next deadline, replacing any earlier one.
#[cfg(feature = "hydrate")]
fn schedule_tick(
    session: RwSignal<Option<LoadSession>>,
    timer: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
) {
    let Some(due) = session.with_untracked(|s| s.as_ref().and_then(LoadSession::next_deadline)) else {
        return;
    };
    let handle = gloo_timers::callback::Timeout::new(delay_until(due, now_ms()), move || {
        let effects = session.try_update(|slot| tick_session(slot, due, now_ms())).unwrap_or_default();
        apply_browser_effects(&effects);
    });
    timer.try_set_value(Some(handle));
}
