use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed (or pending) reservation with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub itinerary_id: Option<Uuid>,
    /// Supplier confirmation code or PNR
    pub booking_ref: Option<String>,
    pub status: String,
    pub booking_date: DateTime<Utc>,
    pub travel_date: Option<DateTime<Utc>>,
    pub cost: f64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
