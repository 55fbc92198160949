use crate::Result;
use crate::row::{get_timestamp, get_timestamp_opt, get_uuid, get_uuid_opt};

use ta_core::Lead;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct LeadRepository {
    pool: SqlitePool,
}

impl LeadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, lead: &Lead) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO leads (
                    id, tenant_id, customer_name, contact_info, phone, destination,
                    budget, travel_date, details, status, assigned_to,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(lead.id.to_string())
        .bind(lead.tenant_id.to_string())
        .bind(&lead.customer_name)
        .bind(&lead.contact_info)
        .bind(&lead.phone)
        .bind(&lead.destination)
        .bind(lead.budget)
        .bind(lead.travel_date.map(|dt| dt.timestamp()))
        .bind(&lead.details)
        .bind(&lead.status)
        .bind(lead.assigned_to.map(|id| id.to_string()))
        .bind(lead.created_at.timestamp())
        .bind(lead.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Lead>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, customer_name, contact_info, phone, destination,
                    budget, travel_date, details, status, assigned_to,
                    created_at, updated_at
                FROM leads
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_lead(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Lead>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, customer_name, contact_info, phone, destination,
                    budget, travel_date, details, status, assigned_to,
                    created_at, updated_at
                FROM leads
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_lead).collect()
    }

    pub async fn update(&self, lead: &Lead) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE leads
                SET customer_name = ?, contact_info = ?, phone = ?, destination = ?,
                    budget = ?, travel_date = ?, details = ?, status = ?,
                    assigned_to = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(&lead.customer_name)
        .bind(&lead.contact_info)
        .bind(&lead.phone)
        .bind(&lead.destination)
        .bind(lead.budget)
        .bind(lead.travel_date.map(|dt| dt.timestamp()))
        .bind(&lead.details)
        .bind(&lead.status)
        .bind(lead.assigned_to.map(|id| id.to_string()))
        .bind(lead.updated_at.timestamp())
        .bind(lead.id.to_string())
        .bind(lead.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM leads WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_lead(row: &SqliteRow) -> Result<Lead> {
    Ok(Lead {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        customer_name: row.try_get("customer_name")?,
        contact_info: row.try_get("contact_info")?,
        phone: row.try_get("phone")?,
        destination: row.try_get("destination")?,
        budget: row.try_get("budget")?,
        travel_date: get_timestamp_opt(row, "travel_date")?,
        details: row.try_get("details")?,
        status: row.try_get("status")?,
        assigned_to: get_uuid_opt(row, "assigned_to")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
