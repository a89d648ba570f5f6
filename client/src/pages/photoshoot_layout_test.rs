use super::*;

fn placement() -> PhotoPlacement {
    let mut layout = PhotoLayout::new(800.0, 600.0);
    let id = layout.place("/shoot/1.jpg", 10.0, 20.0, 200.0, 100.0);
    layout.rotate(id, 15.0).expect("rotate");
    layout.get(id).cloned().expect("placement")
}

#[test]
fn placement_style_positions_and_rotates() {
    assert_eq!(
        placement_style(&placement()),
        "left:10px;top:20px;width:200px;height:100px;transform:rotate(15deg);z-index:0"
    );
}

#[test]
fn canvas_style_uses_layout_size() {
    assert_eq!(canvas_style(&PhotoLayout::new(800.0, 600.0)), "width:800px;height:600px");
}

#[test]
fn status_label_prefers_saving() {
    let status = DraftStatus { draft_restored: true, is_saving: true, has_unsaved_changes: true };
    assert_eq!(draft_status_label(status), "Saving draft...");
}

#[test]
fn status_label_reports_restore_then_local_save() {
    let restored = DraftStatus { draft_restored: true, is_saving: false, has_unsaved_changes: true };
    assert_eq!(draft_status_label(restored), "Restored unsaved draft");
    let saved = DraftStatus { draft_restored: false, is_saving: false, has_unsaved_changes: true };
    assert_eq!(draft_status_label(saved), "Draft saved locally");
    assert_eq!(draft_status_label(DraftStatus::default()), "No local changes");
}

#[test]
fn cascade_slot_wraps_after_ten() {
    assert_eq!(cascade_slot(0), (40.0, 40.0));
    assert_eq!(cascade_slot(2), (88.0, 88.0));
    assert_eq!(cascade_slot(10), cascade_slot(0));
}

#[test]
fn next_photo_url_cycles_images() {
    let images = vec!["/a.jpg".to_owned(), "/b.jpg".to_owned()];
    assert_eq!(next_photo_url(&images, 0), Some("/a.jpg"));
    assert_eq!(next_photo_url(&images, 3), Some("/b.jpg"));
    assert_eq!(next_photo_url(&[], 0), None);
}

#[test]
fn each_photoshoot_id_gets_its_own_draft_key() {
    let mut first = ParamsMap::new();
    first.insert("id", "1".to_owned());
    let mut second = ParamsMap::new();
    second.insert("id", "2".to_owned());

    assert_eq!(layout_draft_key(&photoshoot_id(&first)), "photoshoot-layout-1");
    assert_eq!(layout_draft_key(&photoshoot_id(&second)), "photoshoot-layout-2");
}

#[test]
fn missing_id_segment_is_empty() {
    assert_eq!(photoshoot_id(&ParamsMap::new()), "");
}
