use crate::Result;
use crate::row::{get_timestamp, get_timestamp_opt, get_uuid, get_uuid_opt};

use ta_core::Booking;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, booking: &Booking) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO bookings (
                    id, tenant_id, itinerary_id, booking_ref, status, booking_date,
                    travel_date, cost, price, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.tenant_id.to_string())
        .bind(booking.itinerary_id.map(|id| id.to_string()))
        .bind(&booking.booking_ref)
        .bind(&booking.status)
        .bind(booking.booking_date.timestamp())
        .bind(booking.travel_date.map(|dt| dt.timestamp()))
        .bind(booking.cost)
        .bind(booking.price)
        .bind(booking.created_at.timestamp())
        .bind(booking.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, itinerary_id, booking_ref, status, booking_date,
                    travel_date, cost, price, created_at, updated_at
                FROM bookings
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_booking(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, itinerary_id, booking_ref, status, booking_date,
                    travel_date, cost, price, created_at, updated_at
                FROM bookings
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_booking).collect()
    }

    pub async fn update(&self, booking: &Booking) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE bookings
                SET itinerary_id = ?, booking_ref = ?, status = ?, booking_date = ?,
                    travel_date = ?, cost = ?, price = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(booking.itinerary_id.map(|id| id.to_string()))
        .bind(&booking.booking_ref)
        .bind(&booking.status)
        .bind(booking.booking_date.timestamp())
        .bind(booking.travel_date.map(|dt| dt.timestamp()))
        .bind(booking.cost)
        .bind(booking.price)
        .bind(booking.updated_at.timestamp())
        .bind(booking.id.to_string())
        .bind(booking.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_booking(row: &SqliteRow) -> Result<Booking> {
    Ok(Booking {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        itinerary_id: get_uuid_opt(row, "itinerary_id")?,
        booking_ref: row.try_get("booking_ref")?,
        status: row.try_get("status")?,
        booking_date: get_timestamp(row, "booking_date")?,
        travel_date: get_timestamp_opt(row, "travel_date")?,
        cost: row.try_get("cost")?,
        price: row.try_get("price")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
