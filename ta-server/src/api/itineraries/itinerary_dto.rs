use crate::api::itineraries::itinerary_item_dto::ItineraryItemDto;

use ta_core::Itinerary;

use serde::Serialize;

/// Itinerary DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDto {
    pub id: String,
    pub customer_id: Option<String>,
    pub name: String,
    pub start_date: i64,
    pub end_date: i64,
    pub status: String,
    pub total_price: f64,
    pub items: Vec<ItineraryItemDto>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Itinerary> for ItineraryDto {
    fn from(i: Itinerary) -> Self {
        Self {
            id: i.id.to_string(),
            customer_id: i.customer_id.map(|id| id.to_string()),
            name: i.name,
            start_date: i.start_date.timestamp(),
            end_date: i.end_date.timestamp(),
            status: i.status,
            total_price: i.total_price,
            items: i.items.into_iter().map(ItineraryItemDto::from).collect(),
            created_at: i.created_at.timestamp(),
            updated_at: i.updated_at.timestamp(),
        }
    }
}
