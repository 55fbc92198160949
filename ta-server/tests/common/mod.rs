#![allow(dead_code)]

//! Test infrastructure for ta-server API tests

use ta_auth::{JwtIssuer, JwtValidator, hash_password};
use ta_core::{Role, User};
use ta_db::UserRepository;
use ta_server::{AppState, LogMailer};

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-signing-secret";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/ta-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        issuer: Arc::new(JwtIssuer::new(TEST_SECRET, 900, 604800)),
        validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        mailer: Arc::new(LogMailer),
    }
}

/// Insert a tenant row and return its id
pub async fn create_test_tenant(pool: &SqlitePool) -> Uuid {
    let tenant_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    sqlx::query("INSERT INTO tenants (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)")
        .bind(tenant_id.to_string())
        .bind(format!("Agency {}", tenant_id))
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .expect("Failed to seed tenant");

    tenant_id
}

/// Create a user with TEST_PASSWORD in the given tenant
pub async fn create_test_user(
    pool: &SqlitePool,
    tenant_id: Uuid,
    email: &str,
    role: Role,
) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let user = User::new(
        tenant_id,
        "Test User".to_string(),
        email.to_string(),
        password_hash,
        role,
    );

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to seed user");

    user
}

pub fn access_token_for(state: &AppState, user: &User) -> String {
    state
        .issuer
        .issue_access(user.id, user.tenant_id, user.role)
        .expect("Failed to issue access token")
}

pub fn refresh_token_for(state: &AppState, user: &User) -> String {
    state
        .issuer
        .issue_refresh(user.id, user.tenant_id, user.role)
        .expect("Failed to issue refresh token")
}
