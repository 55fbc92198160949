//! User accounts. Email uniqueness is scoped to the tenant; the schema
//! enforces it with a unique index over (tenant_id, email).

use crate::row::{get_timestamp, get_uuid};
use crate::{DbError, Result};

use ta_core::{Role, User};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, tenant_id, name, email, password_hash, role,
                    is_active, force_password_change, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(user.tenant_id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(user.force_password_change)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, name, email, password_hash, role,
                    is_active, force_password_change, created_at, updated_at
                FROM users
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    /// Login lookup. Email alone is not unique across tenants; the oldest
    /// matching account wins, matching first-registered semantics.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, name, email, password_hash, role,
                    is_active, force_password_change, created_at, updated_at
                FROM users
                WHERE email = ?
                ORDER BY created_at ASC
                LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn find_by_email_and_tenant(
        &self,
        email: &str,
        tenant_id: Uuid,
    ) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, name, email, password_hash, role,
                    is_active, force_password_change, created_at, updated_at
                FROM users
                WHERE email = ? AND tenant_id = ?
            "#,
        )
        .bind(email)
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, name, email, password_hash, role,
                    is_active, force_password_change, created_at, updated_at
                FROM users
                WHERE tenant_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_user).collect()
    }

    /// Returns the number of rows updated (0 when the user does not exist
    /// in this tenant).
    pub async fn update(&self, user: &User) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, email = ?, password_hash = ?, role = ?,
                    is_active = ?, force_password_change = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(user.force_password_change)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .bind(user.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_user(row: &SqliteRow) -> Result<User> {
    let role: String = row.try_get("role")?;

    Ok(User {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        role: Role::from_str(&role).map_err(|e| DbError::Decode {
            column: "role",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        is_active: row.try_get("is_active")?,
        force_password_change: row.try_get("force_password_change")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
