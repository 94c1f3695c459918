use super::*;

// =============================================================================
// normalize_username / validate_credentials
// =============================================================================

#[test]
fn normalize_username_trims_and_lowercases() {
    assert_eq!(normalize_username("  Alice "), Some("alice".to_owned()));
}

#[test]
fn normalize_username_rejects_blank() {
    assert_eq!(normalize_username(""), None);
    assert_eq!(normalize_username("   "), None);
}

#[test]
fn validate_credentials_accepts_both_fields() {
    let (username, password) = validate_credentials(Some("Alice"), Some("secret")).unwrap();
    assert_eq!(username, "alice");
    assert_eq!(password, "secret");
}

#[test]
fn validate_credentials_missing_username() {
    assert!(matches!(validate_credentials(None, Some("secret")), Err(LoginError::MissingCredential)));
    assert!(matches!(validate_credentials(Some(" "), Some("secret")), Err(LoginError::MissingCredential)));
}

#[test]
fn validate_credentials_missing_password() {
    assert!(matches!(validate_credentials(Some("alice"), None), Err(LoginError::MissingCredential)));
    assert!(matches!(validate_credentials(Some("alice"), Some("  ")), Err(LoginError::MissingCredential)));
}

// =============================================================================
// Password hashing
// =============================================================================

#[test]
fn hash_password_produces_argon2id_phc_string() {
    let hash = hash_password("pw").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    let parsed = PasswordHash::new(&hash).unwrap();
    assert!(parsed.salt.is_some());
}

#[test]
fn hash_password_salts_each_call() {
    assert_ne!(hash_password("pw").unwrap(), hash_password("pw").unwrap());
}

#[test]
fn hash_password_uses_memory_hard_parameters() {
    let hash = hash_password("pw").unwrap();
    let params = argon2::Params::try_from(&PasswordHash::new(&hash).unwrap()).unwrap();
    assert!(params.m_cost() >= argon2::Params::DEFAULT_M_COST);
    assert!(params.t_cost() >= argon2::Params::DEFAULT_T_COST);
}

#[test]
fn verify_password_accepts_correct_password() {
    let hash = hash_password("correct horse").unwrap();
    assert!(verify_password("correct horse", &hash));
}

#[test]
fn verify_password_rejects_wrong_password() {
    let hash = hash_password("correct horse").unwrap();
    assert!(!verify_password("battery staple", &hash));
}

#[test]
fn verify_password_rejects_malformed_hash() {
    assert!(!verify_password("pw", "not-a-hash"));
    assert!(!verify_password("pw", ""));
}

// =============================================================================
// prepare_user — blank fields never produce a row.
// =============================================================================

#[test]
fn prepare_user_rejects_blank_username() {
    let user = NewUser { username: "  ", password: "pw", role: None, permissions: &[] };
    assert!(matches!(prepare_user(&user), Err(UserError::BlankUsername)));
}

#[test]
fn prepare_user_rejects_blank_password() {
    let user = NewUser { username: "alice", password: " ", role: None, permissions: &[] };
    assert!(matches!(prepare_user(&user), Err(UserError::BlankPassword)));
}

#[test]
fn prepare_user_normalizes_and_hashes() {
    let user = NewUser { username: " Alice ", password: "pw", role: None, permissions: &[] };
    let (username, hash) = prepare_user(&user).unwrap();
    assert_eq!(username, "alice");
    assert!(verify_password("pw", &hash));
}

#[tokio::test]
async fn upsert_user_with_blank_username_fails_without_db() {
    let state = crate::state::test_helpers::test_app_state();
    let user = NewUser { username: "", password: "pw", role: None, permissions: &[] };
    let err = upsert_user(&state.pool, &user).await.unwrap_err();
    assert!(matches!(err, UserError::BlankUsername));
}

// =============================================================================
// login — blank input never reaches the database.
// =============================================================================

#[tokio::test]
async fn login_with_missing_credentials_fails_without_db() {
    let state = crate::state::test_helpers::test_app_state();
    let err = login(&state.pool, Some("alice"), None).await.unwrap_err();
    assert!(matches!(err, LoginError::MissingCredential));
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        crate::db::init_pool(&url, 2).await.expect("db init")
    }

    #[tokio::test]
    async fn login_round_trip() {
        let pool = pool().await;
        let username = format!("login-test-{}", Uuid::new_v4());
        let perms = vec!["orders".to_owned()];
        upsert_user(&pool, &NewUser { username: &username, password: "pw", role: Some("operator"), permissions: &perms })
            .await
            .unwrap();

        let user = login(&pool, Some(&username), Some("pw")).await.unwrap();
        assert_eq!(user.role.as_deref(), Some("operator"));
        assert_eq!(user.permissions, perms);

        assert!(matches!(
            login(&pool, Some(&username), Some("wrong")).await,
            Err(LoginError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let pool = pool().await;
        let err = login(&pool, Some("no-such-user-7d1f"), Some("pw")).await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn seed_admin_is_idempotent() {
        let pool = pool().await;
        let seed = AdminSeed { username: format!("admin-{}", Uuid::new_v4()), password: "pw".into() };
        let first = seed_admin(&pool, &seed).await.unwrap();
        let second = seed_admin(&pool, &seed).await.unwrap();
        assert_eq!(first, second);
    }
}
