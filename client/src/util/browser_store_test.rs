#![cfg(not(feature = "hydrate"))]

use sitekit::marker::SessionMarker;

use super::*;

#[test]
fn constructors_pick_storage_area() {
    assert_eq!(BrowserStore::local().area(), StorageArea::Local);
    assert_eq!(BrowserStore::session().area(), StorageArea::Session);
}

#[test]
fn storage_is_unavailable_without_browser() {
    let store = BrowserStore::local();
    assert_eq!(store.get("k"), Err(StoreError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(StoreError::Unavailable));
    assert_eq!(store.remove("k"), Err(StoreError::Unavailable));
}

#[test]
fn unavailable_session_storage_gates_the_load() {
    let marker = SessionMarker::new(BrowserStore::session());
    assert!(marker.is_initial_load());
    marker.mark_complete();
    assert!(marker.is_initial_load());
}
