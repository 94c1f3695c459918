//! Shared auth redirect coordination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page must agree on where a user goes next.
//! The decision is a pure function of (loading, has identity, on login page)
//! plus the preserved intended URL; the Leptos effect below only feeds it the
//! current session and path and performs the navigation.
//!
//! Decisions are re-evaluated on every session or path change. A decision
//! superseded by a newer pass is simply not acted on again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::intended_url::{IntendedUrl, LOGIN_PATH, ROOT_PATH, is_login_path, should_preserve};
use super::route_guard::GuardOutcome;
use super::storage::{BrowserStorage, KeyValueStore};
use crate::state::auth::{AuthContext, AuthState};

/// Where the user stands relative to the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectState {
    Loading,
    AuthenticatedOnLoginPage,
    AuthenticatedElsewhere,
    UnauthenticatedOnLoginPage,
    UnauthenticatedElsewhere,
}

/// Navigation the coordinator asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedirectAction {
    Stay,
    Navigate(String),
}

/// Classify the current session and path.
#[must_use]
pub fn classify(session: &AuthState, current_path: &str) -> RedirectState {
    if session.loading {
        return RedirectState::Loading;
    }
    match (session.has_identity(), is_login_path(current_path)) {
        (true, true) => RedirectState::AuthenticatedOnLoginPage,
        (true, false) => RedirectState::AuthenticatedElsewhere,
        (false, true) => RedirectState::UnauthenticatedOnLoginPage,
        (false, false) => RedirectState::UnauthenticatedElsewhere,
    }
}

/// Terminal action for `state`.
///
/// Signed in on the login page: consume the intended URL and go there, or
/// home when nothing usable was preserved. Signed out anywhere else: remember
/// the current path and go to login.
pub fn decide<S: KeyValueStore>(state: RedirectState, current_path: &str, intended: &IntendedUrl<S>) -> RedirectAction {
    match state {
        RedirectState::AuthenticatedOnLoginPage => {
            let target = intended
                .take()
                .filter(|path| should_preserve(path))
                .unwrap_or_else(|| ROOT_PATH.to_owned());
            RedirectAction::Navigate(target)
        }
        RedirectState::UnauthenticatedElsewhere => {
            intended.save(current_path);
            RedirectAction::Navigate(LOGIN_PATH.to_owned())
        }
        RedirectState::Loading | RedirectState::AuthenticatedElsewhere | RedirectState::UnauthenticatedOnLoginPage => {
            RedirectAction::Stay
        }
    }
}

/// `classify` then `decide`.
pub fn coordinate<S: KeyValueStore>(session: &AuthState, current_path: &str, intended: &IntendedUrl<S>) -> RedirectAction {
    decide(classify(session, current_path), current_path, intended)
}

/// Where a protected route should navigate for `outcome`, if anywhere.
///
/// A login redirect goes through the coordinator so `current_url` is
/// preserved. Other redirect targets, such as a missing permission sending
/// the user home, navigate directly and preserve nothing.
pub fn guard_redirect<S: KeyValueStore>(
    outcome: GuardOutcome,
    session: &AuthState,
    current_url: &str,
    intended: &IntendedUrl<S>,
) -> Option<String> {
    let GuardOutcome::Redirect(target) = outcome else {
        return None;
    };
    if target != LOGIN_PATH {
        return Some(target.to_owned());
    }
    match coordinate(session, current_url, intended) {
        RedirectAction::Navigate(to) => Some(to),
        RedirectAction::Stay => None,
    }
}

/// Join router location parts into one URL. `search` and `hash` may be
/// given with or without their leading `?`/`#`.
#[must_use]
pub fn location_url(pathname: &str, search: &str, hash: &str) -> String {
    let mut url = pathname.to_owned();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        url.push('?');
        url.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        url.push('#');
        url.push_str(hash);
    }
    url
}

/// Options for guard-driven navigation: replace the history entry so Back
/// does not bounce through the redirect again.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Run the coordinator whenever the session or `pathname` changes.
pub fn install_auth_redirect<F>(auth: AuthContext, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let intended = IntendedUrl::new(BrowserStorage);
    Effect::new(move || {
        let session = auth.session();
        let path = pathname.get();
        if let RedirectAction::Navigate(target) = coordinate(&session, &path, &intended) {
            navigate(&target, redirect_options());
        }
    });
}
