use crate::Result;
use crate::row::{get_timestamp, get_uuid, get_uuid_opt};

use ta_core::Ticket;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct TicketRepository {
    pool: SqlitePool,
}

impl TicketRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, ticket: &Ticket) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO tickets (
                    id, tenant_id, subject, description, customer_id, assigned_to,
                    status, priority, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ticket.id.to_string())
        .bind(ticket.tenant_id.to_string())
        .bind(&ticket.subject)
        .bind(&ticket.description)
        .bind(ticket.customer_id.map(|id| id.to_string()))
        .bind(ticket.assigned_to.map(|id| id.to_string()))
        .bind(&ticket.status)
        .bind(&ticket.priority)
        .bind(ticket.created_at.timestamp())
        .bind(ticket.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Ticket>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, subject, description, customer_id, assigned_to,
                    status, priority, created_at, updated_at
                FROM tickets
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_ticket(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Ticket>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, subject, description, customer_id, assigned_to,
                    status, priority, created_at, updated_at
                FROM tickets
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_ticket).collect()
    }
}

fn map_ticket(row: &SqliteRow) -> Result<Ticket> {
    Ok(Ticket {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        subject: row.try_get("subject")?,
        description: row.try_get("description")?,
        customer_id: get_uuid_opt(row, "customer_id")?,
        assigned_to: get_uuid_opt(row, "assigned_to")?,
        status: row.try_get("status")?,
        priority: row.try_get("priority")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
