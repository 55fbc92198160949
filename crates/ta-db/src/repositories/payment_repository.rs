use crate::Result;
use crate::row::{get_timestamp, get_uuid};

use ta_core::Payment;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payment: &Payment) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO payments (
                    id, tenant_id, invoice_id, payment_date, amount,
                    method, status, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payment.id.to_string())
        .bind(payment.tenant_id.to_string())
        .bind(payment.invoice_id.to_string())
        .bind(payment.payment_date.timestamp())
        .bind(payment.amount)
        .bind(&payment.method)
        .bind(&payment.status)
        .bind(payment.created_at.timestamp())
        .bind(payment.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Payment>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, invoice_id, payment_date, amount,
                    method, status, created_at, updated_at
                FROM payments
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_payment(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Payment>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, invoice_id, payment_date, amount,
                    method, status, created_at, updated_at
                FROM payments
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_payment).collect()
    }

    pub async fn update(&self, payment: &Payment) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE payments
                SET invoice_id = ?, payment_date = ?, amount = ?,
                    method = ?, status = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(payment.invoice_id.to_string())
        .bind(payment.payment_date.timestamp())
        .bind(payment.amount)
        .bind(&payment.method)
        .bind(&payment.status)
        .bind(payment.updated_at.timestamp())
        .bind(payment.id.to_string())
        .bind(payment.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

fn map_payment(row: &SqliteRow) -> Result<Payment> {
    Ok(Payment {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        invoice_id: get_uuid(row, "invoice_id")?,
        payment_date: get_timestamp(row, "payment_date")?,
        amount: row.try_get("amount")?,
        method: row.try_get("method")?,
        status: row.try_get("status")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
