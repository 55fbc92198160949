//! Invoices. Creation writes an audit row in the same transaction, so an
//! invoice never appears without its trail entry.

use crate::Result;
use crate::repositories::audit_log_repository::insert_audit_log;
use crate::row::{get_timestamp, get_uuid, get_uuid_opt};

use ta_core::{AuditLog, Invoice};

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, invoice: &Invoice, audit: &AuditLog) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO invoices (
                    id, tenant_id, invoice_type, issue_date, due_date, status,
                    amount, currency, customer_id, vendor_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(invoice.id.to_string())
        .bind(invoice.tenant_id.to_string())
        .bind(&invoice.invoice_type)
        .bind(invoice.issue_date.timestamp())
        .bind(invoice.due_date.timestamp())
        .bind(&invoice.status)
        .bind(invoice.amount)
        .bind(&invoice.currency)
        .bind(invoice.customer_id.map(|id| id.to_string()))
        .bind(invoice.vendor_id.map(|id| id.to_string()))
        .bind(invoice.created_at.timestamp())
        .bind(invoice.updated_at.timestamp())
        .execute(&mut *tx)
        .await?;

        insert_audit_log(&mut tx, audit).await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Invoice>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, invoice_type, issue_date, due_date, status,
                    amount, currency, customer_id, vendor_id, created_at, updated_at
                FROM invoices
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_invoice(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Invoice>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, invoice_type, issue_date, due_date, status,
                    amount, currency, customer_id, vendor_id, created_at, updated_at
                FROM invoices
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_invoice).collect()
    }

    pub async fn update(&self, invoice: &Invoice) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE invoices
                SET invoice_type = ?, issue_date = ?, due_date = ?, status = ?,
                    amount = ?, currency = ?, customer_id = ?, vendor_id = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(&invoice.invoice_type)
        .bind(invoice.issue_date.timestamp())
        .bind(invoice.due_date.timestamp())
        .bind(&invoice.status)
        .bind(invoice.amount)
        .bind(&invoice.currency)
        .bind(invoice.customer_id.map(|id| id.to_string()))
        .bind(invoice.vendor_id.map(|id| id.to_string()))
        .bind(invoice.updated_at.timestamp())
        .bind(invoice.id.to_string())
        .bind(invoice.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_invoice(row: &SqliteRow) -> Result<Invoice> {
    Ok(Invoice {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        invoice_type: row.try_get("invoice_type")?,
        issue_date: get_timestamp(row, "issue_date")?,
        due_date: get_timestamp(row, "due_date")?,
        status: row.try_get("status")?,
        amount: row.try_get("amount")?,
        currency: row.try_get("currency")?,
        customer_id: get_uuid_opt(row, "customer_id")?,
        vendor_id: get_uuid_opt(row, "vendor_id")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
