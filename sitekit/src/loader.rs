//! Site loader gate.
//!
//! DESIGN
//! ======
//! The gate is a three-phase state machine (`Pending` → `Completing` → `Done`)
//! that returns [`LoaderEffect`]s instead of touching the DOM, so the host maps
//! them onto the static loading screen, the root container, and the session
//! marker. Completion is latched: however often the preload signal flips or
//! effects re-run, the reveal sequence is emitted once.
//!
//! The gate has no timeout of its own. If the tracker never finishes, the gate
//! stays `Pending`; the tracker's fallback timeout bounds that.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Gate lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Overlay visible, content hidden.
    #[default]
    Pending,
    /// Content fading in, overlay fading out.
    Completing,
    /// Overlay unmounted.
    Done,
}

/// Side effect for the host to apply, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderEffect {
    /// Remove the loading-hidden class from the root container.
    RevealContent,
    /// Start the initial loader's fade-out.
    HideOverlay,
    /// Remove the initial loader element.
    RemoveOverlay,
    /// Persist the session marker so later loads skip gating.
    MarkSessionComplete,
}

/// Per-page-lifecycle gate state.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadSession {
    is_initial_load: bool,
    visible: bool,
    content_visible: bool,
    completed: bool,
    phase: LoaderPhase,
    completed_at_ms: Option<f64>,
    transition_ms: f64,
}

impl LoadSession {
    /// Start a session. A non-initial load is `Done` immediately.
    #[must_use]
    pub fn start(is_initial_load: bool, now_ms: f64, transition_ms: f64) -> (Self, Vec<LoaderEffect>) {
        if is_initial_load {
            let session = Self {
                is_initial_load,
                visible: true,
                content_visible: false,
                completed: false,
                phase: LoaderPhase::Pending,
                completed_at_ms: None,
                transition_ms,
            };
            return (session, Vec::new());
        }

        let session = Self {
            is_initial_load,
            visible: false,
            content_visible: true,
            completed: true,
            phase: LoaderPhase::Done,
            completed_at_ms: Some(now_ms),
            transition_ms,
        };
        (session, vec![LoaderEffect::RevealContent, LoaderEffect::RemoveOverlay])
    }

    /// Feed the tracker's current `is_loading` value.
    pub fn observe(&mut self, is_loading: bool, now_ms: f64) -> Vec<LoaderEffect> {
        if is_loading || self.phase != LoaderPhase::Pending {
            return Vec::new();
        }
        self.complete(now_ms)
    }

    /// Begin the reveal. Only the first call has any effect.
    pub fn complete(&mut self, now_ms: f64) -> Vec<LoaderEffect> {
        if self.completed {
            return Vec::new();
        }
        self.completed = true;
        self.content_visible = true;
        self.phase = LoaderPhase::Completing;
        self.completed_at_ms = Some(now_ms);
        vec![LoaderEffect::RevealContent, LoaderEffect::HideOverlay, LoaderEffect::MarkSessionComplete]
    }

    /// Finish the fade once the transition has elapsed.
    pub fn tick(&mut self, now_ms: f64) -> Vec<LoaderEffect> {
        match (self.phase, self.next_deadline()) {
            (LoaderPhase::Completing, Some(due)) if now_ms >= due => {
                self.phase = LoaderPhase::Done;
                self.visible = false;
                vec![LoaderEffect::RemoveOverlay]
            }
            _ => Vec::new(),
        }
    }

    /// When the host should call [`Self::tick`] next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        if self.phase != LoaderPhase::Completing {
            return None;
        }
        self.completed_at_ms.map(|at| at + self.transition_ms)
    }

    #[must_use]
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        self.is_initial_load
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_content_visible(&self) -> bool {
        self.content_visible
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
