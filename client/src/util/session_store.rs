//! Persisted session hints and the UI language preference.
//!
//! The server session cookie is authoritative. The snapshot kept here is a
//! hint used when the remote session check cannot be completed, and it is
//! cleared on logout. The language preference survives logout.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use super::storage::{KeyValueStore, keys};
use crate::net::types::User;

/// Language used when none is stored.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages the UI ships with.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "tr"];

/// Persisted `isLoggedIn` / `username` / `role` triple.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub is_logged_in: bool,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self { is_logged_in: true, username: Some(user.username.clone()), role: user.role.clone() }
    }

    /// Read the snapshot; anything unreadable counts as logged out.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let is_logged_in = store.get(keys::IS_LOGGED_IN).is_some_and(|v| v == "true");
        let username = store.get(keys::USERNAME).filter(|v| !v.trim().is_empty());
        Self {
            is_logged_in: is_logged_in && username.is_some(),
            username,
            role: store.get(keys::ROLE).filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) {
        store.set(keys::IS_LOGGED_IN, if self.is_logged_in { "true" } else { "false" });
        match &self.username {
            Some(name) => store.set(keys::USERNAME, name),
            None => store.remove(keys::USERNAME),
        }
        match &self.role {
            Some(role) => store.set(keys::ROLE, role),
            None => store.remove(keys::ROLE),
        }
    }

    /// Remove the identity keys. `language` and `intended_url` are untouched.
    pub fn clear<S: KeyValueStore>(store: &S) {
        store.remove(keys::IS_LOGGED_IN);
        store.remove(keys::USERNAME);
        store.remove(keys::ROLE);
    }

    /// Rebuild a provisional user from the snapshot.
    ///
    /// The user carries no permissions, so module-gated routes stay closed
    /// until a real session check succeeds.
    #[must_use]
    pub fn to_user(&self) -> Option<User> {
        if !self.is_logged_in {
            return None;
        }
        let username = self.username.clone()?;
        Some(User { id: String::new(), username, role: self.role.clone(), permissions: Vec::new() })
    }
}

/// Stored language preference, falling back to [`DEFAULT_LANGUAGE`].
pub fn load_language<S: KeyValueStore>(store: &S) -> String {
    store
        .get(keys::LANGUAGE)
        .filter(|lang| SUPPORTED_LANGUAGES.contains(&lang.as_str()))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
}

/// Persist `lang` if supported. Returns whether it was stored.
pub fn save_language<S: KeyValueStore>(store: &S, lang: &str) -> bool {
    if !SUPPORTED_LANGUAGES.contains(&lang) {
        return false;
    }
    store.set(keys::LANGUAGE, lang);
    true
}

/// Apply the `lang` attribute on the `<html>` element.
pub fn apply_language(lang: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("lang", lang);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}
