use crate::ItineraryItem;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A planned trip composed of day-by-day items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub total_price: f64,
    pub items: Vec<ItineraryItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
