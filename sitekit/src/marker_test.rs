use super::*;
use crate::store::MemoryStore;

#[test]
fn fresh_session_is_initial_load() {
    let marker = SessionMarker::new(MemoryStore::new());
    assert!(marker.is_initial_load());
}

#[test]
fn mark_complete_ends_initial_load() {
    let store = MemoryStore::new();
    let marker = SessionMarker::new(store.clone());
    marker.mark_complete();
    assert_eq!(store.peek(SESSION_MARKER_KEY).as_deref(), Some("true"));
    assert!(!marker.is_initial_load());
}

#[test]
fn second_marker_over_same_store_sees_completion() {
    let store = MemoryStore::new();
    SessionMarker::new(store.clone()).mark_complete();
    assert!(!SessionMarker::new(store).is_initial_load());
}

#[test]
fn reset_rearms_gating() {
    let store = MemoryStore::seeded([(SESSION_MARKER_KEY, "true")]);
    let marker = SessionMarker::new(store.clone());
    assert!(!marker.is_initial_load());
    marker.reset();
    assert!(marker.is_initial_load());
}

#[test]
fn write_failure_is_swallowed() {
    let store = MemoryStore::new();
    store.fail_writes(true);
    let marker = SessionMarker::new(store.clone());
    marker.mark_complete();
    assert!(marker.is_initial_load());
    assert_eq!(store.access().writes, 1);
}
