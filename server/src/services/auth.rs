//! Credential login service: validation, password hashing, user upsert.
//!
//! Passwords are stored as Argon2id PHC strings in `users.password_hash`.

use argon2::Argon2;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::SessionUser;
use crate::config::AdminSeed;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("username and password are required")]
    MissingCredential,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("username must not be blank")]
    BlankUsername,
    #[error("password must not be blank")]
    BlankPassword,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Fields for creating or replacing a user.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: Option<&'a str>,
    pub permissions: &'a [String],
}

/// Trim and lowercase a username. `None` when blank.
#[must_use]
pub fn normalize_username(username: &str) -> Option<String> {
    let normalized = username.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    Some(normalized)
}

/// Check that both credentials are present, returning the normalized
/// username and the password as given.
///
/// # Errors
///
/// Returns [`LoginError::MissingCredential`] if either field is absent or
/// blank.
pub fn validate_credentials<'a>(
    username: Option<&str>,
    password: Option<&'a str>,
) -> Result<(String, &'a str), LoginError> {
    let username = username.and_then(normalize_username).ok_or(LoginError::MissingCredential)?;
    let password = password.filter(|p| !p.trim().is_empty()).ok_or(LoginError::MissingCredential)?;
    Ok((username, password))
}

/// Hash a password with Argon2id into a PHC string. The salt and cost
/// parameters are embedded in the result.
///
/// # Errors
///
/// Returns an error if the salt cannot be encoded or hashing fails.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes)?;
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC string. A malformed stored value
/// never verifies.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}

/// Check credentials against the `users` table.
///
/// # Errors
///
/// `MissingCredential` for blank input (checked before touching the database),
/// `InvalidCredentials` for an unknown user or wrong password, `Db` otherwise.
pub async fn login(pool: &PgPool, username: Option<&str>, password: Option<&str>) -> Result<SessionUser, LoginError> {
    let (username, password) = validate_credentials(username, password)?;

    let row = sqlx::query(
        "SELECT id, username, password_hash, role, permissions
         FROM users WHERE username = $1",
    )
    .bind(&username)
    .fetch_optional(pool)
    .await?
    .ok_or(LoginError::InvalidCredentials)?;

    let hash: String = row.get("password_hash");
    if !verify_password(password, &hash) {
        return Err(LoginError::InvalidCredentials);
    }

    Ok(SessionUser {
        id: row.get("id"),
        username: row.get("username"),
        role: row.get("role"),
        permissions: row.get("permissions"),
    })
}

/// Insert a user, or replace password, role and permissions if the username
/// exists. Returns the user ID.
///
/// # Errors
///
/// Blank username or password is rejected before hashing. Hashing and
/// database failures are passed through.
pub async fn upsert_user(pool: &PgPool, user: &NewUser<'_>) -> Result<Uuid, UserError> {
    let (username, hash) = prepare_user(user)?;

    let row = sqlx::query(
        "INSERT INTO users (id, username, password_hash, role, permissions)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (username) DO UPDATE
            SET password_hash = EXCLUDED.password_hash,
                role = EXCLUDED.role,
                permissions = EXCLUDED.permissions
         RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(&username)
    .bind(&hash)
    .bind(user.role)
    .bind(user.permissions)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

/// Normalized username and password hash for a new user row.
fn prepare_user(user: &NewUser<'_>) -> Result<(String, String), UserError> {
    let username = normalize_username(user.username).ok_or(UserError::BlankUsername)?;
    if user.password.trim().is_empty() {
        return Err(UserError::BlankPassword);
    }
    let hash = hash_password(user.password).map_err(|e| UserError::Hash(e.to_string()))?;
    Ok((username, hash))
}

/// Create or refresh the configured admin account.
///
/// # Errors
///
/// Same as [`upsert_user`].
pub async fn seed_admin(pool: &PgPool, seed: &AdminSeed) -> Result<Uuid, UserError> {
    upsert_user(
        pool,
        &NewUser { username: &seed.username, password: &seed.password, role: Some(ADMIN_ROLE), permissions: &[] },
    )
    .await
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
