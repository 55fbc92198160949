//! Itineraries and their day-by-day items. Items live and die with the
//! itinerary, so writes that touch both run inside a transaction.

use crate::Result;
use crate::row::{get_timestamp, get_uuid, get_uuid_opt};

use ta_core::{Itinerary, ItineraryItem};

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct ItineraryRepository {
    pool: SqlitePool,
}

impl ItineraryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, itinerary: &Itinerary) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO itineraries (
                    id, tenant_id, customer_id, name, start_date, end_date,
                    status, total_price, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(itinerary.id.to_string())
        .bind(itinerary.tenant_id.to_string())
        .bind(itinerary.customer_id.map(|id| id.to_string()))
        .bind(&itinerary.name)
        .bind(itinerary.start_date.timestamp())
        .bind(itinerary.end_date.timestamp())
        .bind(&itinerary.status)
        .bind(itinerary.total_price)
        .bind(itinerary.created_at.timestamp())
        .bind(itinerary.updated_at.timestamp())
        .execute(&mut *tx)
        .await?;

        for item in &itinerary.items {
            insert_item(&mut tx, item).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Itinerary>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, customer_id, name, start_date, end_date,
                    status, total_price, created_at, updated_at
                FROM itineraries
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut itinerary = map_itinerary(&row)?;
        itinerary.items = self.find_items(itinerary.id).await?;

        Ok(Some(itinerary))
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Itinerary>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, customer_id, name, start_date, end_date,
                    status, total_price, created_at, updated_at
                FROM itineraries
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut itineraries = rows
            .iter()
            .map(map_itinerary)
            .collect::<Result<Vec<_>>>()?;

        for itinerary in &mut itineraries {
            itinerary.items = self.find_items(itinerary.id).await?;
        }

        Ok(itineraries)
    }

    /// Updates the itinerary header and replaces its items wholesale.
    /// Returns 0 without touching items when the itinerary is not in this
    /// tenant.
    pub async fn update(&self, itinerary: &Itinerary) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE itineraries
                SET customer_id = ?, name = ?, start_date = ?, end_date = ?,
                    status = ?, total_price = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(itinerary.customer_id.map(|id| id.to_string()))
        .bind(&itinerary.name)
        .bind(itinerary.start_date.timestamp())
        .bind(itinerary.end_date.timestamp())
        .bind(&itinerary.status)
        .bind(itinerary.total_price)
        .bind(itinerary.updated_at.timestamp())
        .bind(itinerary.id.to_string())
        .bind(itinerary.tenant_id.to_string())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(0);
        }

        sqlx::query("DELETE FROM itinerary_items WHERE itinerary_id = ?")
            .bind(itinerary.id.to_string())
            .execute(&mut *tx)
            .await?;

        for item in &itinerary.items {
            insert_item(&mut tx, item).await?;
        }

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM itineraries WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() > 0 {
            sqlx::query("DELETE FROM itinerary_items WHERE itinerary_id = ?")
                .bind(id.to_string())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    async fn find_items(&self, itinerary_id: Uuid) -> Result<Vec<ItineraryItem>> {
        let rows = sqlx::query(
            r#"
                SELECT id, itinerary_id, day, item_type, description, cost, price,
                    status, created_at, updated_at
                FROM itinerary_items
                WHERE itinerary_id = ?
                ORDER BY day ASC, created_at ASC
            "#,
        )
        .bind(itinerary_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_item).collect()
    }
}

async fn insert_item(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    item: &ItineraryItem,
) -> Result<()> {
    sqlx::query(
        r#"
            INSERT INTO itinerary_items (
                id, itinerary_id, day, item_type, description, cost, price,
                status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(item.id.to_string())
    .bind(item.itinerary_id.to_string())
    .bind(item.day)
    .bind(&item.item_type)
    .bind(&item.description)
    .bind(item.cost)
    .bind(item.price)
    .bind(&item.status)
    .bind(item.created_at.timestamp())
    .bind(item.updated_at.timestamp())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

fn map_itinerary(row: &SqliteRow) -> Result<Itinerary> {
    Ok(Itinerary {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        customer_id: get_uuid_opt(row, "customer_id")?,
        name: row.try_get("name")?,
        start_date: get_timestamp(row, "start_date")?,
        end_date: get_timestamp(row, "end_date")?,
        status: row.try_get("status")?,
        total_price: row.try_get("total_price")?,
        items: Vec::new(),
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

fn map_item(row: &SqliteRow) -> Result<ItineraryItem> {
    Ok(ItineraryItem {
        id: get_uuid(row, "id")?,
        itinerary_id: get_uuid(row, "itinerary_id")?,
        day: row.try_get("day")?,
        item_type: row.try_get("item_type")?,
        description: row.try_get("description")?,
        cost: row.try_get("cost")?,
        price: row.try_get("price")?,
        status: row.try_get("status")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
