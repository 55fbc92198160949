//! Audit trail rows. Inserts happen inside the transaction of the write
//! they describe, so the insert helper takes an open transaction rather
//! than the pool.

use crate::Result;
use crate::row::{get_timestamp, get_uuid, get_uuid_opt};

use ta_core::AuditLog;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct AuditLogRepository {
    pool: SqlitePool,
}

impl AuditLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<AuditLog>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, user_id, action, entity, entity_id,
                    details, created_at
                FROM audit_logs
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_audit_log).collect()
    }
}

pub(crate) async fn insert_audit_log(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    entry: &AuditLog,
) -> Result<()> {
    sqlx::query(
        r#"
            INSERT INTO audit_logs (
                id, tenant_id, user_id, action, entity, entity_id,
                details, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.id.to_string())
    .bind(entry.tenant_id.to_string())
    .bind(entry.user_id.to_string())
    .bind(&entry.action)
    .bind(&entry.entity)
    .bind(entry.entity_id.map(|id| id.to_string()))
    .bind(&entry.details)
    .bind(entry.created_at.timestamp())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

fn map_audit_log(row: &SqliteRow) -> Result<AuditLog> {
    Ok(AuditLog {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        user_id: get_uuid(row, "user_id")?,
        action: row.try_get("action")?,
        entity: row.try_get("entity")?,
        entity_id: get_uuid_opt(row, "entity_id")?,
        details: row.try_get("details")?,
        created_at: get_timestamp(row, "created_at")?,
    })
}
