use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.get("k").is_none());
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert!(store.get("k").is_none());
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set(keys::USERNAME, "alice");
    assert_eq!(b.get(keys::USERNAME).as_deref(), Some("alice"));
    assert_eq!(b.len(), 1);
}

#[test]
fn memory_storage_set_overwrites() {
    let store = MemoryStorage::new();
    store.set(keys::ROLE, "operator");
    store.set(keys::ROLE, "admin");
    assert_eq!(store.get(keys::ROLE).as_deref(), Some("admin"));
    assert_eq!(store.len(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_degrades_to_noop_off_browser() {
    let store = BrowserStorage;
    store.set(keys::INTENDED_URL, "/orders/5");
    assert!(store.get(keys::INTENDED_URL).is_none());
    store.remove(keys::INTENDED_URL);
}

#[test]
fn reference_forwards_to_store() {
    let store = MemoryStorage::new();
    let by_ref = &store;
    by_ref.set(keys::LANGUAGE, "tr");
    assert_eq!(store.get(keys::LANGUAGE).as_deref(), Some("tr"));
}
