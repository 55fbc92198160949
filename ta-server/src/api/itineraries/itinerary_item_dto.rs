use ta_core::ItineraryItem;

use serde::Serialize;

/// Itinerary item DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItemDto {
    pub id: String,
    pub day: i32,
    pub item_type: String,
    pub description: Option<String>,
    pub cost: f64,
    pub price: f64,
    pub status: String,
}

impl From<ItineraryItem> for ItineraryItemDto {
    fn from(i: ItineraryItem) -> Self {
        Self {
            id: i.id.to_string(),
            day: i.day,
            item_type: i.item_type,
            description: i.description,
            cost: i.cost,
            price: i.price,
            status: i.status,
        }
    }
}
