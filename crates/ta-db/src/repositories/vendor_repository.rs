use crate::Result;
use crate::row::{get_timestamp, get_uuid};

use ta_core::Vendor;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct VendorRepository {
    pool: SqlitePool,
}

impl VendorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vendor: &Vendor) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO vendors (
                    id, tenant_id, name, vendor_type, contact_person,
                    contact_info, payment_terms, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vendor.id.to_string())
        .bind(vendor.tenant_id.to_string())
        .bind(&vendor.name)
        .bind(&vendor.vendor_type)
        .bind(&vendor.contact_person)
        .bind(&vendor.contact_info)
        .bind(&vendor.payment_terms)
        .bind(vendor.created_at.timestamp())
        .bind(vendor.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Vendor>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, name, vendor_type, contact_person,
                    contact_info, payment_terms, created_at, updated_at
                FROM vendors
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_vendor(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Vendor>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, name, vendor_type, contact_person,
                    contact_info, payment_terms, created_at, updated_at
                FROM vendors
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_vendor).collect()
    }

    pub async fn update(&self, vendor: &Vendor) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE vendors
                SET name = ?, vendor_type = ?, contact_person = ?,
                    contact_info = ?, payment_terms = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(&vendor.name)
        .bind(&vendor.vendor_type)
        .bind(&vendor.contact_person)
        .bind(&vendor.contact_info)
        .bind(&vendor.payment_terms)
        .bind(vendor.updated_at.timestamp())
        .bind(vendor.id.to_string())
        .bind(vendor.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

fn map_vendor(row: &SqliteRow) -> Result<Vendor> {
    Ok(Vendor {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        name: row.try_get("name")?,
        vendor_type: row.try_get("vendor_type")?,
        contact_person: row.try_get("contact_person")?,
        contact_info: row.try_get("contact_info")?,
        payment_terms: row.try_get("payment_terms")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
