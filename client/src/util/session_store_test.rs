use super::*;
use crate::util::storage::MemoryStorage;

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        role: Some("operator".to_owned()),
        permissions: vec!["orders".to_owned()],
    }
}

// =============================================================
// SessionSnapshot
// =============================================================

#[test]
fn empty_store_loads_logged_out() {
    let store = MemoryStorage::new();
    assert_eq!(SessionSnapshot::load(&store), SessionSnapshot::default());
}

#[test]
fn save_then_load_restores_snapshot() {
    let store = MemoryStorage::new();
    let snapshot = SessionSnapshot::from_user(&alice());
    snapshot.save(&store);

    assert_eq!(store.get(keys::IS_LOGGED_IN).as_deref(), Some("true"));
    assert_eq!(SessionSnapshot::load(&store), snapshot);
}

#[test]
fn logged_in_flag_without_username_loads_logged_out() {
    let store = MemoryStorage::new();
    store.set(keys::IS_LOGGED_IN, "true");
    assert!(!SessionSnapshot::load(&store).is_logged_in);
}

#[test]
fn non_true_flag_is_logged_out() {
    let store = MemoryStorage::new();
    store.set(keys::IS_LOGGED_IN, "yes");
    store.set(keys::USERNAME, "alice");
    assert!(!SessionSnapshot::load(&store).is_logged_in);
}

#[test]
fn clear_keeps_language_and_intended_url() {
    let store = MemoryStorage::new();
    SessionSnapshot::from_user(&alice()).save(&store);
    store.set(keys::LANGUAGE, "tr");
    store.set(keys::INTENDED_URL, "/orders/5");

    SessionSnapshot::clear(&store);

    assert!(store.get(keys::IS_LOGGED_IN).is_none());
    assert!(store.get(keys::USERNAME).is_none());
    assert!(store.get(keys::ROLE).is_none());
    assert_eq!(store.get(keys::LANGUAGE).as_deref(), Some("tr"));
    assert_eq!(store.get(keys::INTENDED_URL).as_deref(), Some("/orders/5"));
}

#[test]
fn save_without_role_removes_stale_role() {
    let store = MemoryStorage::new();
    store.set(keys::ROLE, "admin");
    SessionSnapshot { is_logged_in: true, username: Some("bob".to_owned()), role: None }.save(&store);
    assert!(store.get(keys::ROLE).is_none());
}

#[test]
fn to_user_has_no_permissions() {
    let user = SessionSnapshot::from_user(&alice()).to_user().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.role.as_deref(), Some("operator"));
    assert!(user.permissions.is_empty());
}

#[test]
fn to_user_is_none_when_logged_out() {
    assert!(SessionSnapshot::default().to_user().is_none());
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_defaults_to_english() {
    let store = MemoryStorage::new();
    assert_eq!(load_language(&store), DEFAULT_LANGUAGE);
}

#[test]
fn save_language_round_trips_supported_value() {
    let store = MemoryStorage::new();
    assert!(save_language(&store, "tr"));
    assert_eq!(load_language(&store), "tr");
}

#[test]
fn save_language_rejects_unknown_value() {
    let store = MemoryStorage::new();
    assert!(!save_language(&store, "xx"));
    assert!(store.get(keys::LANGUAGE).is_none());
}

#[test]
fn unknown_stored_language_falls_back() {
    let store = MemoryStorage::new();
    store.set(keys::LANGUAGE, "klingon");
    assert_eq!(load_language(&store), DEFAULT_LANGUAGE);
}
