#![allow(clippy::float_cmp)]

use super::*;

fn layout_with_photo() -> (PhotoLayout, PlacementId) {
    let mut layout = PhotoLayout::new(1000.0, 600.0);
    let id = layout.place("/shoot/1.jpg", 100.0, 100.0, 200.0, 150.0);
    (layout, id)
}

// =============================================================
// Placement
// =============================================================

#[test]
fn default_layout_uses_default_canvas() {
    let layout = PhotoLayout::default();
    assert_eq!(layout.canvas_width, DEFAULT_CANVAS_WIDTH);
    assert_eq!(layout.canvas_height, DEFAULT_CANVAS_HEIGHT);
    assert!(layout.placements.is_empty());
}

#[test]
fn place_stacks_new_photos_on_top() {
    let mut layout = PhotoLayout::new(1000.0, 600.0);
    let a = layout.place("/a.jpg", 0.0, 0.0, 100.0, 100.0);
    let b = layout.place("/b.jpg", 0.0, 0.0, 100.0, 100.0);
    assert_eq!(layout.get(a).map(|p| p.z_index), Some(0));
    assert_eq!(layout.get(b).map(|p| p.z_index), Some(1));
    let order: Vec<_> = layout.sorted().iter().map(|p| p.id).collect();
    assert_eq!(order, vec![a, b]);
}

#[test]
fn place_clamps_into_canvas() {
    let mut layout = PhotoLayout::new(1000.0, 600.0);
    let id = layout.place("/big.jpg", 900.0, -50.0, 5000.0, 2.0);
    let p = layout.get(id).expect("placement");
    assert_eq!(p.width, 1000.0);
    assert_eq!(p.height, MIN_PLACEMENT_SIZE);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
}

// =============================================================
// Editing
// =============================================================

#[test]
fn move_by_stops_at_edges() {
    let (mut layout, id) = layout_with_photo();
    layout.move_by(id, 50.0, -20.0).expect("move");
    let p = layout.get(id).expect("placement");
    assert_eq!((p.x, p.y), (150.0, 80.0));

    layout.move_by(id, 10_000.0, 10_000.0).expect("move");
    let p = layout.get(id).expect("placement");
    assert_eq!((p.x, p.y), (800.0, 450.0));
}

#[test]
fn resize_respects_minimum_and_shifts_to_fit() {
    let (mut layout, id) = layout_with_photo();
    layout.resize(id, 1.0, 1.0).expect("resize");
    let p = layout.get(id).expect("placement");
    assert_eq!((p.width, p.height), (MIN_PLACEMENT_SIZE, MIN_PLACEMENT_SIZE));

    layout.resize(id, 950.0, 100.0).expect("resize");
    let p = layout.get(id).expect("placement");
    assert_eq!(p.width, 950.0);
    assert_eq!(p.x, 50.0);
}

#[test]
fn rotate_normalizes_angle() {
    let (mut layout, id) = layout_with_photo();
    layout.rotate(id, 370.0).expect("rotate");
    assert_eq!(layout.get(id).map(|p| p.rotation), Some(10.0));
    layout.rotate(id, -30.0).expect("rotate");
    assert_eq!(layout.get(id).map(|p| p.rotation), Some(340.0));
}

#[test]
fn normalize_degrees_handles_edges() {
    assert_eq!(normalize_degrees(0.0), 0.0);
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(725.0), 5.0);
}

#[test]
fn bring_to_front_raises_above_others() {
    let mut layout = PhotoLayout::new(1000.0, 600.0);
    let a = layout.place("/a.jpg", 0.0, 0.0, 100.0, 100.0);
    let b = layout.place("/b.jpg", 0.0, 0.0, 100.0, 100.0);
    layout.bring_to_front(a).expect("front");
    assert_eq!(layout.get(a).map(|p| p.z_index), Some(2));
    let order: Vec<_> = layout.sorted().iter().map(|p| p.id).collect();
    assert_eq!(order, vec![b, a]);

    // Already on top: unchanged.
    layout.bring_to_front(a).expect("front");
    assert_eq!(layout.get(a).map(|p| p.z_index), Some(2));
}

#[test]
fn remove_returns_placement() {
    let (mut layout, id) = layout_with_photo();
    let removed = layout.remove(id).expect("remove");
    assert_eq!(removed.photo_url, "/shoot/1.jpg");
    assert!(layout.get(id).is_none());
}

#[test]
fn unknown_placement_is_an_error() {
    let (mut layout, _) = layout_with_photo();
    let ghost = Uuid::new_v4();
    assert_eq!(layout.move_by(ghost, 1.0, 1.0), Err(LayoutError::UnknownPlacement(ghost)));
    assert_eq!(layout.resize(ghost, 1.0, 1.0), Err(LayoutError::UnknownPlacement(ghost)));
    assert_eq!(layout.rotate(ghost, 1.0), Err(LayoutError::UnknownPlacement(ghost)));
    assert_eq!(layout.bring_to_front(ghost), Err(LayoutError::UnknownPlacement(ghost)));
    assert_eq!(layout.remove(ghost), Err(LayoutError::UnknownPlacement(ghost)));
}

// =============================================================
// History
// =============================================================

#[test]
fn commit_numbers_revisions_monotonically() {
    let (layout, _) = layout_with_photo();
    let mut history = LayoutHistory::default();
    assert!(history.is_empty());
    assert_eq!(history.commit(&layout, 10.0), 1);
    assert_eq!(history.commit(&layout, 20.0), 2);
    assert_eq!(history.latest().map(|r| r.revision), Some(2));
    assert_eq!(history.get(1).map(|r| r.saved_at_ms), Some(10.0));
}

#[test]
fn revert_returns_saved_snapshot() {
    let (mut layout, id) = layout_with_photo();
    let mut history = LayoutHistory::default();
    let rev = history.commit(&layout, 0.0);
    layout.move_by(id, 100.0, 0.0).expect("move");

    let reverted = history.revert_to(rev).expect("revert");
    assert_eq!(reverted.get(id).map(|p| p.x), Some(100.0));
    assert_eq!(history.revert_to(99), Err(LayoutError::UnknownRevision(99)));
}

#[test]
fn history_evicts_oldest_beyond_capacity() {
    let (layout, _) = layout_with_photo();
    let mut history = LayoutHistory::new(3);
    for i in 0..5 {
        history.commit(&layout, f64::from(i));
    }
    assert_eq!(history.len(), 3);
    let revs: Vec<_> = history.revisions().map(|r| r.revision).collect();
    assert_eq!(revs, vec![3, 4, 5]);
    assert!(matches!(history.revert_to(1), Err(LayoutError::UnknownRevision(1))));
}

#[test]
fn zero_capacity_keeps_latest() {
    let (layout, _) = layout_with_photo();
    let mut history = LayoutHistory::new(0);
    history.commit(&layout, 0.0);
    history.commit(&layout, 1.0);
    assert_eq!(history.len(), 1);
    assert_eq!(history.latest().map(|r| r.revision), Some(2));
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn layout_draft_key_embeds_photoshoot_id() {
    assert_eq!(layout_draft_key("abc"), "photoshoot-layout-abc");
}

#[test]
fn layout_draft_survives_json() {
    let (layout, _) = layout_with_photo();
    let draft = LayoutDraft { layout, base_revision: Some(3) };
    let raw = serde_json::to_string(&draft).expect("encode");
    let back: LayoutDraft = serde_json::from_str(&raw).expect("decode");
    assert_eq!(back, draft);
}

#[test]
fn undersized_canvas_from_storage_does_not_panic() {
    let raw = r#"{"canvas_width":10,"canvas_height":10,"placements":[]}"#;
    let mut layout: PhotoLayout = serde_json::from_str(raw).expect("decode");
    let id = layout.place("/a.jpg", 5.0, 5.0, 100.0, 100.0);
    let p = layout.get(id).expect("placement");
    assert_eq!(p.width, MIN_PLACEMENT_SIZE);
    assert_eq!(p.x, 0.0);
}
