use super::*;

#[test]
fn new_store_is_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("cc_user_name"), Ok(None));
    assert!(store.snapshot().is_empty());
}

#[test]
fn set_get_remove_cycle() {
    let store = MemoryStore::new();
    store.set("cc_user_name", "Sam").unwrap();
    assert_eq!(store.get("cc_user_name"), Ok(Some("Sam".to_owned())));
    store.remove("cc_user_name").unwrap();
    assert_eq!(store.get("cc_user_name"), Ok(None));
}

#[test]
fn remove_of_missing_key_succeeds() {
    let store = MemoryStore::new();
    assert_eq!(store.remove("cc_user_email"), Ok(()));
}

#[test]
fn with_entries_seeds_values() {
    let store = MemoryStore::with_entries([("cc_logged_in", "1"), ("cc_user_name", "Sam")]);
    assert_eq!(store.snapshot().len(), 2);
    assert_eq!(store.get("cc_logged_in"), Ok(Some("1".to_owned())));
}

#[test]
fn failing_store_rejects_every_call() {
    let store = MemoryStore::failing();
    assert_eq!(store.get("k"), Err(StorageError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("k"), Err(StorageError::Unavailable));
}

#[test]
fn failing_mode_can_be_toggled_without_losing_entries() {
    let store = MemoryStore::with_entries([("cc_user_name", "Sam")]);
    store.set_failing(true);
    assert_eq!(store.get("cc_user_name"), Err(StorageError::Unavailable));
    assert_eq!(store.snapshot().get("cc_user_name").map(String::as_str), Some("Sam"));
    store.set_failing(false);
    assert_eq!(store.get("cc_user_name"), Ok(Some("Sam".to_owned())));
}
