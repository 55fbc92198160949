use ta_core::Booking;

use serde::Serialize;

/// Booking DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub itinerary_id: Option<String>,
    pub booking_ref: Option<String>,
    pub status: String,
    pub booking_date: i64,
    pub travel_date: Option<i64>,
    pub cost: f64,
    pub price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id.to_string(),
            itinerary_id: b.itinerary_id.map(|id| id.to_string()),
            booking_ref: b.booking_ref,
            status: b.status,
            booking_date: b.booking_date.timestamp(),
            travel_date: b.travel_date.map(|dt| dt.timestamp()),
            cost: b.cost,
            price: b.price,
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
        }
    }
}
