//! Auth routes: credential login, session check, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::auth::{self as auth_svc, LoginError};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// COOKIES
// =============================================================================

pub(crate) fn session_cookie(token: String, secure: bool, ttl_hours: i32) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(i64::from(ttl_hours)))
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LoginBody {
    username: Option<String>,
    password: Option<String>,
}

/// Status code and machine-readable error tag for a failed login.
pub(crate) fn login_error_response(err: &LoginError) -> (StatusCode, &'static str) {
    match err {
        LoginError::MissingCredential => (StatusCode::BAD_REQUEST, "missing_credential"),
        LoginError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
        LoginError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

fn error_body(status: StatusCode, error: &str) -> Response {
    (status, Json(serde_json::json!({ "error": error }))).into_response()
}

/// `POST /api/auth/login` — check credentials, create a session, set cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    let user = match auth_svc::login(&state.pool, body.username.as_deref(), body.password.as_deref()).await {
        Ok(user) => user,
        Err(e) => {
            match &e {
                LoginError::Db(db) => tracing::error!(error = %db, "login query failed"),
                _ => tracing::info!(reason = %e, "login rejected"),
            }
            let (status, tag) = login_error_response(&e);
            return error_body(status, tag);
        }
    };

    let token = match session::create_session(&state.pool, user.id, state.config.session_ttl_hours).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal");
        }
    };

    tracing::info!(user_id = %user.id, username = %user.username, "login succeeded");
    let cookie = session_cookie(token, state.config.cookie_secure, state.config.session_ttl_hours);
    (jar.add(cookie), Json(user)).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete the session if any, always clear the
/// cookie. A missing or stale cookie still logs out.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if !token.is_empty() {
        if let Err(e) = session::delete_session(&state.pool, token).await {
            tracing::warn!(error = %e, "session delete failed");
        }
    }

    (jar.add(cleared_session_cookie(state.config.cookie_secure)), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
