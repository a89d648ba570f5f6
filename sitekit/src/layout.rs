//! Photo layout model for the photoshoot layout editor.
//!
//! A layout is a fixed-size canvas with absolutely positioned photos. Each
//! placement carries its own bounding box, rotation, and stacking order.
//! Editing operations keep every placement's unrotated bounding box inside the
//! canvas. [`LayoutHistory`] keeps a bounded list of committed revisions, and
//! [`LayoutDraft`] is the payload stored by draft persistence while editing.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_LAYOUT_REVISIONS, MIN_PLACEMENT_SIZE};

/// Unique identifier for a placed photo.
pub type PlacementId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown placement: {0}")]
    UnknownPlacement(PlacementId),
    #[error("unknown layout revision: {0}")]
    UnknownRevision(u64),
}

/// A photo placed on the layout canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPlacement {
    pub id: PlacementId,
    pub photo_url: String,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees, normalized to `[0, 360)`.
    pub rotation: f64,
    /// Stacking order; higher values are drawn on top.
    pub z_index: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub placements: Vec<PhotoPlacement>,
}

impl Default for PhotoLayout {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl PhotoLayout {
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width: canvas_width.max(MIN_PLACEMENT_SIZE),
            canvas_height: canvas_height.max(MIN_PLACEMENT_SIZE),
            placements: Vec::new(),
        }
    }

    /// Place a photo on top of the stack, clamped into the canvas.
    pub fn place(&mut self, photo_url: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> PlacementId {
        let mut placement = PhotoPlacement {
            id: Uuid::new_v4(),
            photo_url: photo_url.into(),
            x,
            y,
            width,
            height,
            rotation: 0.0,
            z_index: self.top_z().map_or(0, |z| z + 1),
        };
        self.fit(&mut placement);
        let id = placement.id;
        self.placements.push(placement);
        id
    }

    #[must_use]
    pub fn get(&self, id: PlacementId) -> Option<&PhotoPlacement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Translate a placement, stopping at the canvas edges.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownPlacement`] if `id` is not on the canvas.
    pub fn move_by(&mut self, id: PlacementId, dx: f64, dy: f64) -> Result<(), LayoutError> {
        self.edit(id, |p| {
            p.x += dx;
            p.y += dy;
        })
    }

    /// Resize a placement, keeping its top-left corner where possible.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownPlacement`] if `id` is not on the canvas.
    pub fn resize(&mut self, id: PlacementId, width: f64, height: f64) -> Result<(), LayoutError> {
        self.edit(id, |p| {
            p.width = width;
            p.height = height;
        })
    }

    /// Rotate a placement by `degrees` (positive is clockwise).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownPlacement`] if `id` is not on the canvas.
    pub fn rotate(&mut self, id: PlacementId, degrees: f64) -> Result<(), LayoutError> {
        self.edit(id, |p| p.rotation = normalize_degrees(p.rotation + degrees))
    }

    /// Raise a placement above every other one.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownPlacement`] if `id` is not on the canvas.
    pub fn bring_to_front(&mut self, id: PlacementId) -> Result<(), LayoutError> {
        let others_top = self.placements.iter().filter(|p| p.id != id).map(|p| p.z_index).max();
        let placement = self
            .placements
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LayoutError::UnknownPlacement(id))?;
        if let Some(top) = others_top {
            if placement.z_index <= top {
                placement.z_index = top + 1;
            }
        }
        Ok(())
    }

    /// Remove a placement and return it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownPlacement`] if `id` is not on the canvas.
    pub fn remove(&mut self, id: PlacementId) -> Result<PhotoPlacement, LayoutError> {
        let idx = self
            .placements
            .iter()
            .position(|p| p.id == id)
            .ok_or(LayoutError::UnknownPlacement(id))?;
        Ok(self.placements.remove(idx))
    }

    /// Placements in draw order (bottom first). Ties keep insertion order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&PhotoPlacement> {
        let mut out: Vec<&PhotoPlacement> = self.placements.iter().collect();
        out.sort_by_key(|p| p.z_index);
        out
    }

    fn top_z(&self) -> Option<i64> {
        self.placements.iter().map(|p| p.z_index).max()
    }

    fn edit(&mut self, id: PlacementId, f: impl FnOnce(&mut PhotoPlacement)) -> Result<(), LayoutError> {
        let (canvas_width, canvas_height) = (self.canvas_width, self.canvas_height);
        let placement = self
            .placements
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LayoutError::UnknownPlacement(id))?;
        f(placement);
        fit_into(placement, canvas_width, canvas_height);
        Ok(())
    }

    fn fit(&self, placement: &mut PhotoPlacement) {
        fit_into(placement, self.canvas_width, self.canvas_height);
    }
}

fn fit_into(p: &mut PhotoPlacement, canvas_width: f64, canvas_height: f64) {
    // min/max instead of clamp: deserialized canvases may be smaller than a placement.
    p.width = p.width.max(MIN_PLACEMENT_SIZE).min(canvas_width.max(MIN_PLACEMENT_SIZE));
    p.height = p.height.max(MIN_PLACEMENT_SIZE).min(canvas_height.max(MIN_PLACEMENT_SIZE));
    p.x = p.x.min(canvas_width - p.width).max(0.0);
    p.y = p.y.min(canvas_height - p.height).max(0.0);
    p.rotation = normalize_degrees(p.rotation);
}

/// Normalize an angle to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// A committed layout snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRevision {
    /// Monotonic revision number, starting at 1.
    pub revision: u64,
    pub saved_at_ms: f64,
    pub layout: PhotoLayout,
}

/// Bounded revision history. The oldest revision is evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutHistory {
    revisions: VecDeque<LayoutRevision>,
    next_revision: u64,
    capacity: usize,
}

impl Default for LayoutHistory {
    fn default() -> Self {
        Self::new(MAX_LAYOUT_REVISIONS)
    }
}

impl LayoutHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { revisions: VecDeque::with_capacity(capacity), next_revision: 1, capacity }
    }

    /// Snapshot `layout` and return its revision number.
    pub fn commit(&mut self, layout: &PhotoLayout, now_ms: f64) -> u64 {
        let revision = self.next_revision;
        self.next_revision += 1;
        if self.revisions.len() == self.capacity {
            self.revisions.pop_front();
        }
        self.revisions.push_back(LayoutRevision { revision, saved_at_ms: now_ms, layout: layout.clone() });
        revision
    }

    #[must_use]
    pub fn get(&self, revision: u64) -> Option<&LayoutRevision> {
        self.revisions.iter().find(|r| r.revision == revision)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LayoutRevision> {
        self.revisions.back()
    }

    /// Copy of the layout saved as `revision`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRevision`] if it was never committed or was evicted.
    pub fn revert_to(&self, revision: u64) -> Result<PhotoLayout, LayoutError> {
        self.get(revision)
            .map(|r| r.layout.clone())
            .ok_or(LayoutError::UnknownRevision(revision))
    }

    pub fn revisions(&self) -> impl Iterator<Item = &LayoutRevision> {
        self.revisions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

/// In-progress layout edit as stored in a local draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDraft {
    pub layout: PhotoLayout,
    /// Revision the edit started from, if any.
    #[serde(default)]
    pub base_revision: Option<u64>,
}

/// Draft storage key for a photoshoot's layout.
#[must_use]
pub fn layout_draft_key(photoshoot_id: &str) -> String {
    format!("photoshoot-layout-{photoshoot_id}")
}
