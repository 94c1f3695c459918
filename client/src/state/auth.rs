//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthState` is the plain session value. `AuthContext` wraps it in a signal
//! and is provided once at the app root; components obtain it with
//! [`use_auth`] instead of reaching for ambient globals. Every write also
//! mirrors the identity into the persisted session snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::session_store::SessionSnapshot;
use crate::util::storage::BrowserStorage;

/// Authentication state tracking the current user and loading status.
///
/// Starts out loading with no user. `loading` flips to `false` once per page
/// load, either when the session check resolves or when a login completes
/// first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.user.is_some()
    }

    /// Resolved and signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.has_identity()
    }

    /// Apply the session-check result. Ignored once already resolved, so a
    /// late check never overrides a login or logout that happened meanwhile.
    pub fn resolve(&mut self, user: Option<User>) -> bool {
        if !self.loading {
            return false;
        }
        self.user = user;
        self.loading = false;
        true
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Reactive auth provider handed to the component tree via context.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: BrowserStorage,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()), store: BrowserStorage }
    }

    /// Create a context and provide it to the current reactive owner.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    /// Current session (tracked).
    pub fn session(&self) -> AuthState {
        self.state.get()
    }

    /// Current session without subscribing the caller.
    pub fn session_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Current user (tracked).
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Apply the background session-check result.
    pub fn resolve(&self, user: Option<User>) {
        let snapshot = user.as_ref().map(SessionSnapshot::from_user);
        if self.state.try_update(|s| s.resolve(user)).unwrap_or(false) {
            self.persist(snapshot.as_ref());
        }
    }

    /// Record a completed login.
    pub fn login(&self, user: User) {
        let snapshot = SessionSnapshot::from_user(&user);
        self.state.update(|s| s.login(user));
        self.persist(Some(&snapshot));
    }

    /// Drop the identity. The intended URL is left alone so a later login
    /// still returns to it.
    pub fn logout(&self) {
        self.state.update(AuthState::logout);
        self.persist(None);
    }

    fn persist(&self, snapshot: Option<&SessionSnapshot>) {
        match snapshot {
            Some(snapshot) => snapshot.save(&self.store),
            None => SessionSnapshot::clear(&self.store),
        }
    }
}

/// Fetch the [`AuthContext`] provided by the app root.
///
/// # Panics
///
/// Panics when called outside the provider's scope. That is a wiring bug, not
/// a runtime condition, so it fails at construction.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
