use leptos::reactive::owner::Owner;

use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), username: "alice".to_owned(), role: None, permissions: Vec::new() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn resolve_with_user_authenticates() {
    let mut state = AuthState::default();
    assert!(state.resolve(Some(alice())));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolve_with_none_is_unauthenticated() {
    let mut state = AuthState::default();
    assert!(state.resolve(None));
    assert!(!state.loading);
    assert!(!state.has_identity());
}

#[test]
fn resolve_only_applies_once() {
    let mut state = AuthState::default();
    assert!(state.resolve(None));
    assert!(!state.resolve(Some(alice())));
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn late_resolve_does_not_undo_login() {
    let mut state = AuthState::default();
    state.login(alice());
    assert!(!state.resolve(None));
    assert!(state.is_authenticated());
}

#[test]
fn logout_clears_identity_and_stays_resolved() {
    let mut state = AuthState::default();
    state.resolve(Some(alice()));
    state.logout();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_tracks_state_transitions() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AuthContext::provide();
        assert!(ctx.is_loading());

        ctx.resolve(None);
        assert!(!ctx.is_loading());
        assert!(!ctx.is_authenticated());

        ctx.login(alice());
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user().map(|u| u.username), Some("alice".to_owned()));

        ctx.logout();
        assert!(ctx.user().is_none());
    });
}

#[test]
fn use_auth_returns_provided_context() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = AuthContext::provide();
        provided.login(alice());
        assert!(use_auth().is_authenticated());
    });
}

#[test]
#[should_panic]
fn use_auth_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_auth();
    });
}
