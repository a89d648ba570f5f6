//! DOM handles mutated by the site loader.
//!
//! `#initial-loader` and `#root` are rendered by `app::Document` as static
//! markup, outside any reactive view, so the loader drives them imperatively.
//! A missing element is skipped; the gate never depends on the DOM state.

#[cfg(test)]
#[path = "dom_handles_test.rs"]
mod dom_handles_test;

use sitekit::consts::{HIDDEN_CLASS, INITIAL_LOADER_ID, LOADING_HIDDEN_CLASS, ROOT_ID};
use sitekit::loader::LoaderEffect;

/// Concrete DOM mutation for a loader effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomAction {
    AddClass { id: &'static str, class: &'static str },
    RemoveClass { id: &'static str, class: &'static str },
    RemoveElement { id: &'static str },
}

/// Map a loader effect onto the DOM. Effects that are not DOM mutations map to `None`.
pub fn dom_action(effect: LoaderEffect) -> Option<DomAction> {
    match effect {
        LoaderEffect::RevealContent => Some(DomAction::RemoveClass { id: ROOT_ID, class: LOADING_HIDDEN_CLASS }),
        LoaderEffect::HideOverlay => Some(DomAction::AddClass { id: INITIAL_LOADER_ID, class: HIDDEN_CLASS }),
        LoaderEffect::RemoveOverlay => Some(DomAction::RemoveElement { id: INITIAL_LOADER_ID }),
        LoaderEffect::MarkSessionComplete => None,
    }
}

/// Apply `action` to the current document.
pub fn apply(action: DomAction) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        match action {
            DomAction::AddClass { id, class } => {
                if let Some(el) = doc.get_element_by_id(id) {
                    let _ = el.class_list().add_1(class);
                }
            }
            DomAction::RemoveClass { id, class } => {
                if let Some(el) = doc.get_element_by_id(id) {
                    let _ = el.class_list().remove_1(class);
                }
            }
            DomAction::RemoveElement { id } => {
                if let Some(el) = doc.get_element_by_id(id) {
                    el.remove();
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
    }
}
