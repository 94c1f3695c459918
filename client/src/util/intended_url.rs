//! Remembers the protected path a signed-out user tried to open.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard saves the current path before bouncing to the login page;
//! the redirect coordinator takes it back out once login succeeds so the user
//! lands where they were headed.
//!
//! The login path and root are never stored, so the post-login redirect can
//! never loop back onto the login page.

#[cfg(test)]
#[path = "intended_url_test.rs"]
mod intended_url_test;

use super::storage::{KeyValueStore, keys};

/// Path of the login page.
pub const LOGIN_PATH: &str = "/auth";

/// Application root, the default post-login destination.
pub const ROOT_PATH: &str = "/";

/// Whether `path` is the login page itself (ignoring query, fragment and a
/// trailing slash).
#[must_use]
pub fn is_login_path(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    let bare = if bare.len() > 1 { bare.trim_end_matches('/') } else { bare };
    bare == LOGIN_PATH
}

/// Whether `path` may be remembered as a post-login destination.
///
/// Excludes the empty path, root, and the login path plus anything under it.
#[must_use]
pub fn should_preserve(path: &str) -> bool {
    if path.is_empty() || path == ROOT_PATH {
        return false;
    }
    let Some(rest) = path.strip_prefix(LOGIN_PATH) else {
        return true;
    };
    !(rest.is_empty() || rest.starts_with(['/', '?', '#']))
}

/// Intended-URL slot over any key-value store.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntendedUrl<S> {
    store: S,
}

impl<S: KeyValueStore> IntendedUrl<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store `path` unless it is the login path or root.
    pub fn save(&self, path: &str) {
        if should_preserve(path) {
            self.store.set(keys::INTENDED_URL, path);
        }
    }

    /// The preserved path, if any.
    pub fn get(&self) -> Option<String> {
        self.store.get(keys::INTENDED_URL).filter(|p| !p.is_empty())
    }

    pub fn clear(&self) {
        self.store.remove(keys::INTENDED_URL);
    }

    /// Read and clear the preserved path in one step.
    pub fn take(&self) -> Option<String> {
        let path = self.get();
        self.clear();
        path
    }
}
