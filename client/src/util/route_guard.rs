//! Route-guard decision logic.
//!
//! One guard covers every protected page. It is parameterized by whether a
//! session is required at all and by an optional module permission; the
//! loading view is supplied by the `ProtectedRoute` component that renders
//! the outcome.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use super::intended_url::{LOGIN_PATH, ROOT_PATH};
use crate::state::auth::AuthState;

/// What a protected route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: show the placeholder.
    Loading,
    /// Show the protected view.
    Render,
    /// Leave for the given path without rendering anything.
    Redirect(&'static str),
}

/// Guard parameters for one route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub require_auth: bool,
    pub permission: Option<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::protected()
    }
}

impl GuardConfig {
    /// Signed-in users only.
    #[must_use]
    pub fn protected() -> Self {
        Self { require_auth: true, permission: None }
    }

    /// Anyone, signed in or not.
    #[must_use]
    pub fn public() -> Self {
        Self { require_auth: false, permission: None }
    }

    /// Signed-in users holding `module`.
    #[must_use]
    pub fn with_permission(module: impl Into<String>) -> Self {
        Self { require_auth: true, permission: Some(module.into()) }
    }

    /// Decide the outcome for `session`.
    ///
    /// Loading wins over identity; no identity sends the user to login;
    /// a missing module permission sends them home.
    #[must_use]
    pub fn evaluate(&self, session: &AuthState) -> GuardOutcome {
        if !self.require_auth {
            return GuardOutcome::Render;
        }
        if session.loading {
            return GuardOutcome::Loading;
        }
        let Some(user) = &session.user else {
            return GuardOutcome::Redirect(LOGIN_PATH);
        };
        match &self.permission {
            Some(module) if !user.has_permission(module) => GuardOutcome::Redirect(ROOT_PATH),
            _ => GuardOutcome::Render,
        }
    }
}
