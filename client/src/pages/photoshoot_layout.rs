//! Photoshoot layout editor with local draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route: `/admin/photoshoots/:id/layout`. The page edits a `LayoutDraft`
//! with button controls and mirrors it to `localStorage` under
//! `photoshoot-layout-{id}` through `use_draft_persistence`, so an accidental
//! reload restores the work in progress. Revisions are kept in memory for
//! revert; nothing is sent to a backend.
//!
//! The editor is rebuilt whenever the `:id` segment changes, so every
//! photoshoot gets its own draft key, history, and persistence hook.

#[cfg(test)]
#[path = "photoshoot_layout_test.rs"]
mod photoshoot_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use leptos_router::params::ParamsMap;
use sitekit::drafts::{DraftOptions, DraftStatus};
use sitekit::layout::{LayoutDraft, LayoutError, LayoutHistory, PhotoLayout, PhotoPlacement, PlacementId, layout_draft_key};

use crate::state::site::SiteState;
use crate::util::clock::now_ms;
use crate::util::draft_persistence::use_draft_persistence;

const NUDGE_PX: f64 = 10.0;
const ROTATE_STEP_DEG: f64 = 15.0;
const NEW_PHOTO_WIDTH: f64 = 240.0;
const NEW_PHOTO_HEIGHT: f64 = 160.0;
const CASCADE_STEP_PX: f64 = 24.0;
const CASCADE_SLOTS: usize = 10;

/// Inline style positioning a placement on the canvas.
pub fn placement_style(p: &PhotoPlacement) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;transform:rotate({}deg);z-index:{}",
        p.x, p.y, p.width, p.height, p.rotation, p.z_index
    )
}

pub fn canvas_style(layout: &PhotoLayout) -> String {
    format!("width:{}px;height:{}px", layout.canvas_width, layout.canvas_height)
}

/// Human-readable draft state for the status line.
pub fn draft_status_label(status: DraftStatus) -> &'static str {
    if status.is_saving {
        "Saving draft..."
    } else if status.draft_restored {
        "Restored unsaved draft"
    } else if status.has_unsaved_changes {
        "Draft saved locally"
    } else {
        "No local changes"
    }
}

/// Top-left corner for the `count`-th new photo, cascading so photos don't cover each other exactly.
#[allow(clippy::cast_precision_loss)]
pub fn cascade_slot(count: usize) -> (f64, f64) {
    let offset = 40.0 + (count % CASCADE_SLOTS) as f64 * CASCADE_STEP_PX;
    (offset, offset)
}

/// Photo to add next, cycling through the available images.
pub fn next_photo_url(images: &[String], count: usize) -> Option<&str> {
    if images.is_empty() {
        return None;
    }
    images.get(count % images.len()).map(String::as_str)
}

/// Photoshoot id from the route parameters; empty when the segment is missing.
pub fn photoshoot_id(params: &ParamsMap) -> String {
    params.get("id").unwrap_or_default()
}

fn edit_selected(
    draft: RwSignal<LayoutDraft>,
    selected: RwSignal<Option<PlacementId>>,
    message: RwSignal<String>,
    edit: impl FnOnce(&mut PhotoLayout, PlacementId) -> Result<(), LayoutError>,
) {
    let Some(id) = selected.get_untracked() else {
        message.set("Select a photo first.".to_owned());
        return;
    };
    let mut result = Ok(());
    draft.update(|d| result = edit(&mut d.layout, id));
    if let Err(e) = result {
        message.set(e.to_string());
        selected.set(None);
    }
}

#[component]
pub fn PhotoshootLayoutPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(photoshoot_id));

    move || view! { <LayoutEditor photoshoot_id=id.get()/> }
}

#[component]
fn LayoutEditor(photoshoot_id: String) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    let draft = RwSignal::new(LayoutDraft::default());
    let history = RwSignal::new(LayoutHistory::default());
    let selected = RwSignal::new(None::<PlacementId>);
    let message = RwSignal::new(String::new());

    let drafts = use_draft_persistence(
        draft.into(),
        DraftOptions::new(layout_draft_key(&photoshoot_id)),
        Some(Callback::new(move |restored: LayoutDraft| {
            message.set("Restored your unsaved layout.".to_owned());
            draft.set(restored);
        })),
    );

    let on_add = move |_| {
        let images = site.with_untracked(|s| s.manifest.all_images());
        let count = draft.with_untracked(|d| d.layout.placements.len());
        let Some(url) = next_photo_url(&images, count) else {
            message.set("No photos available to place.".to_owned());
            return;
        };
        let (x, y) = cascade_slot(count);
        let mut placed = None;
        draft.update(|d| placed = Some(d.layout.place(url, x, y, NEW_PHOTO_WIDTH, NEW_PHOTO_HEIGHT)));
        selected.set(placed);
    };

    let nudge = move |dx: f64, dy: f64| edit_selected(draft, selected, message, |l, id| l.move_by(id, dx * NUDGE_PX, dy * NUDGE_PX));
    let rotate = move |dir: f64| edit_selected(draft, selected, message, |l, id| l.rotate(id, dir * ROTATE_STEP_DEG));
    let on_front = move |_| edit_selected(draft, selected, message, PhotoLayout::bring_to_front);
    let on_remove = move |_| {
        edit_selected(draft, selected, message, |l, id| l.remove(id).map(|_| ()));
        selected.set(None);
    };

    let on_commit = move |_| {
        let layout = draft.with_untracked(|d| d.layout.clone());
        let Some(revision) = history.try_update(|h| h.commit(&layout, now_ms())) else {
            return;
        };
        draft.update(|d| d.base_revision = Some(revision));
        message.set(format!("Saved revision {revision}."));
    };

    let on_revert = move |_| {
        let target = draft
            .with_untracked(|d| d.base_revision)
            .or_else(|| history.with_untracked(|h| h.latest().map(|r| r.revision)));
        let Some(revision) = target else {
            message.set("No saved revision to revert to.".to_owned());
            return;
        };
        match history.with_untracked(|h| h.revert_to(revision)) {
            Ok(layout) => {
                draft.set(LayoutDraft { layout, base_revision: Some(revision) });
                selected.set(None);
                message.set(format!("Reverted to revision {revision}."));
            }
            Err(e) => message.set(e.to_string()),
        }
    };

    let on_clear = move |_| {
        drafts.clear_draft();
        message.set("Local draft cleared.".to_owned());
    };

    let on_save_local = move |_| {
        drafts.save_draft();
        message.set("Draft saved locally.".to_owned());
    };

    let placements = move || {
        draft.with(|d| {
            d.layout
                .sorted()
                .into_iter()
                .map(|p| {
                    let id = p.id;
                    let is_selected = move || selected.get() == Some(id);
                    view! {
                        <img
                            class="layout-photo"
                            class:layout-photo--selected=is_selected
                            src=p.photo_url.clone()
                            style=placement_style(p)
                            alt=""
                            on:click=move |_| selected.set(Some(id))
                        />
                    }
                })
                .collect_view()
        })
    };

    let revision_label = move || {
        history.with(|h| match h.latest() {
            Some(r) => format!("{} revisions, latest #{}", h.len(), r.revision),
            None => "No revisions yet".to_owned(),
        })
    };

    view! {
        <main class="layout-editor">
            <header class="layout-editor__header">
                <h1>"Layout: " {photoshoot_id}</h1>
                <span class="layout-editor__status">{move || draft_status_label(drafts.status().get())}</span>
                <span class="layout-editor__revisions">{revision_label}</span>
            </header>
            <div class="layout-editor__toolbar">
                <button on:click=on_add>"Add photo"</button>
                <button on:click=move |_| nudge(-1.0, 0.0)>"Left"</button>
                <button on:click=move |_| nudge(1.0, 0.0)>"Right"</button>
                <button on:click=move |_| nudge(0.0, -1.0)>"Up"</button>
                <button on:click=move |_| nudge(0.0, 1.0)>"Down"</button>
                <button on:click=move |_| rotate(-1.0)>"Rotate left"</button>
                <button on:click=move |_| rotate(1.0)>"Rotate right"</button>
                <button on:click=on_front>"Bring to front"</button>
                <button on:click=on_remove>"Remove"</button>
                <button on:click=on_commit>"Save revision"</button>
                <button on:click=on_revert>"Discard changes"</button>
                <button on:click=on_save_local>"Save draft now"</button>
                <button on:click=on_clear>"Clear local draft"</button>
            </div>
            <p class="layout-editor__message">{move || message.get()}</p>
            <div class="layout-canvas" style=move || draft.with(|d| canvas_style(&d.layout))>
                {placements}
            </div>
        </main>
    }
}
