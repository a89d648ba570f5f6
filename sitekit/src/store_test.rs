use super::*;

#[test]
fn get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").expect("get"), None);
    assert_eq!(store.access().reads, 1);
}

#[test]
fn set_then_get_returns_last_write() {
    let store = MemoryStore::new();
    store.set("k", "one").expect("set");
    store.set("k", "two").expect("set");
    assert_eq!(store.get("k").expect("get").as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set("k", "v").expect("set");
    assert_eq!(store.peek("k").as_deref(), Some("v"));
}

#[test]
fn seeded_entries_do_not_count_as_access() {
    let store = MemoryStore::seeded([("a", "1"), ("b", "2")]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.access(), StoreAccess::default());
    assert!(store.contains("a"));
    assert_eq!(store.peek("b").as_deref(), Some("2"));
    assert_eq!(store.access().total(), 0);
}

#[test]
fn remove_missing_key_succeeds() {
    let store = MemoryStore::new();
    store.remove("nope").expect("remove");
    assert!(store.is_empty());
    assert_eq!(store.access().removes, 1);
}

#[test]
fn failing_writes_leave_entries_untouched() {
    let store = MemoryStore::seeded([("k", "old")]);
    store.fail_writes(true);
    let err = store.set("k", "new").expect_err("write should fail");
    assert!(matches!(err, StoreError::Write { ref key, .. } if key == "k"));
    assert_eq!(store.peek("k").as_deref(), Some("old"));

    store.fail_writes(false);
    store.set("k", "new").expect("set");
    assert_eq!(store.peek("k").as_deref(), Some("new"));
}

#[test]
fn failing_removes_keep_entry() {
    let store = MemoryStore::seeded([("k", "v")]);
    store.fail_removes(true);
    assert!(matches!(store.remove("k"), Err(StoreError::Remove { .. })));
    assert!(store.contains("k"));
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::Write { key: "draft-1".to_owned(), reason: "quota exceeded".to_owned() };
    assert_eq!(err.to_string(), "failed to write draft-1: quota exceeded");
    assert_eq!(StoreError::Unavailable.to_string(), "storage is unavailable");
}
