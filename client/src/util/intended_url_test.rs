use super::*;
use crate::util::storage::MemoryStorage;

fn slot() -> (MemoryStorage, IntendedUrl<MemoryStorage>) {
    let store = MemoryStorage::new();
    (store.clone(), IntendedUrl::new(store))
}

// =============================================================
// should_preserve
// =============================================================

#[test]
fn should_preserve_ordinary_paths() {
    for path in ["/orders/5", "/orders", "/job-orders/12?tab=rolls", "/quality", "/authors", "/x/auth"] {
        assert!(should_preserve(path), "expected {path:?} to be preserved");
    }
}

#[test]
fn should_not_preserve_login_or_root() {
    assert!(!should_preserve(LOGIN_PATH));
    assert!(!should_preserve(ROOT_PATH));
    assert!(!should_preserve(""));
}

#[test]
fn should_not_preserve_login_prefixed_paths() {
    for path in ["/auth/", "/auth/callback", "/auth?next=/orders", "/auth#top"] {
        assert!(!should_preserve(path), "expected {path:?} to be rejected");
    }
}

// =============================================================
// is_login_path
// =============================================================

#[test]
fn is_login_path_matches_bare_and_decorated_forms() {
    assert!(is_login_path("/auth"));
    assert!(is_login_path("/auth/"));
    assert!(is_login_path("/auth?next=1"));
    assert!(!is_login_path("/auth/callback"));
    assert!(!is_login_path("/authors"));
    assert!(!is_login_path("/"));
}

// =============================================================
// save / get / clear / take
// =============================================================

#[test]
fn save_then_get_returns_path() {
    let (_, url) = slot();
    url.save("/orders/5");
    assert_eq!(url.get().as_deref(), Some("/orders/5"));
}

#[test]
fn save_then_clear_leaves_nothing() {
    let (_, url) = slot();
    url.save("/orders/5");
    url.clear();
    assert!(url.get().is_none());
}

#[test]
fn save_ignores_login_and_root() {
    let (store, url) = slot();
    url.save(LOGIN_PATH);
    url.save(ROOT_PATH);
    assert!(url.get().is_none());
    assert!(store.is_empty());
}

#[test]
fn save_login_does_not_overwrite_previous_intent() {
    let (_, url) = slot();
    url.save("/orders/5");
    url.save("/auth");
    assert_eq!(url.get().as_deref(), Some("/orders/5"));
}

#[test]
fn take_returns_and_clears() {
    let (store, url) = slot();
    url.save("/rolls/3");
    assert_eq!(url.take().as_deref(), Some("/rolls/3"));
    assert!(url.take().is_none());
    assert!(store.get(keys::INTENDED_URL).is_none());
}

#[test]
fn get_ignores_empty_stored_value() {
    let (store, url) = slot();
    store.set(keys::INTENDED_URL, "");
    assert!(url.get().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_storage_loses_preservation_without_failing() {
    let url = IntendedUrl::new(crate::util::storage::BrowserStorage);
    url.save("/orders/5");
    assert!(url.get().is_none());
    url.clear();
}
