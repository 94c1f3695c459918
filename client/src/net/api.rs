//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{ApiError, LoginRequest};

/// How the session check classified an HTTP status.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCheck {
    /// 2xx: body carries the user.
    Authenticated,
    /// 401/403: definitively signed out.
    SignedOut,
    /// Anything else: the check itself failed.
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_session_status(status: u16) -> SessionCheck {
    match status {
        200..=299 => SessionCheck::Authenticated,
        401 | 403 => SessionCheck::SignedOut,
        _ => SessionCheck::Failed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16, error: Option<&str>) -> String {
    match (status, error) {
        (400, _) | (_, Some("missing_credential")) => "Enter both username and password.".to_owned(),
        (401, _) | (_, Some("invalid_credentials")) => "Invalid username or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// Returns `Ok(None)` when the server says the browser is signed out.
///
/// # Errors
///
/// Returns an error string when the check could not be completed (network
/// failure, server error, or on the server side of SSR).
pub async fn fetch_current_user() -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match classify_session_status(resp.status()) {
            SessionCheck::Authenticated => resp.json::<User>().await.map(Some).map_err(|e| e.to_string()),
            SessionCheck::SignedOut => Ok(None),
            SessionCheck::Failed => Err(format!("session check failed: {}", resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Log in with username + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing error string if the credentials are rejected or the
/// request fails.
pub async fn login(username: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<ApiError>().await.ok();
            return Err(login_failed_message(resp.status(), body.as_ref().map(|b| b.error.as_str())));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}
