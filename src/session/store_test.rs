use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get(KEY_TOKEN), None);

    store.set(KEY_TOKEN, "t1");
    assert_eq!(store.get(KEY_TOKEN), Some("t1".to_owned()));

    store.set(KEY_TOKEN, "t2");
    assert_eq!(store.get(KEY_TOKEN), Some("t2".to_owned()));
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::new();
    store.set(KEY_USER, "{}");
    store.remove(KEY_USER);
    store.remove(KEY_USER);
    assert_eq!(store.get(KEY_USER), None);
}

#[test]
fn keys_are_distinct() {
    let store = MemoryStore::new();
    store.set(KEY_BRANCH_ID, "7");
    store.set(KEY_BRANCH_NAME, "Munich");
    assert_eq!(store.get(KEY_BRANCH_ID), Some("7".to_owned()));
    assert_eq!(store.get(KEY_BRANCH_NAME), Some("Munich".to_owned()));
    assert_eq!(store.get(KEY_BRANCH_DETAILS), None);
}
