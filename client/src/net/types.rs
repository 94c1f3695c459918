//! Shared wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON returned by `/api/auth/me` and
//! `/api/auth/login` so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role that implicitly holds every module permission.
pub const ADMIN_ROLE: &str = "admin";

/// Authenticated user as returned by the session check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login name, also used as the display name.
    pub username: String,
    /// Role name (e.g. `"admin"`, `"operator"`), if assigned.
    #[serde(default)]
    pub role: Option<String>,
    /// Application modules this user may open (e.g. `"orders"`, `"quality"`).
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl User {
    /// Whether this user may open `module`. Admins may open everything.
    #[must_use]
    pub fn has_permission(&self, module: &str) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE) || self.permissions.iter().any(|p| p == module)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Error body returned by auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
