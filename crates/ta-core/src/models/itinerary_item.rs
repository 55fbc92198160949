use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of an itinerary (flight, hotel, activity, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: Uuid,
    pub itinerary_id: Uuid,
    /// 1-based day within the itinerary
    pub day: i32,
    pub item_type: String,
    pub description: Option<String>,
    /// Cost charged by the vendor
    pub cost: f64,
    /// Price charged to the client
    pub price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
