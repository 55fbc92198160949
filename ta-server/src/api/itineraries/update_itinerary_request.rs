use crate::api::itineraries::create_itinerary_request::CreateItineraryItemRequest;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItineraryRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// Unix seconds
    #[serde(default)]
    pub start_date: Option<i64>,

    /// Unix seconds
    #[serde(default)]
    pub end_date: Option<i64>,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub total_price: Option<f64>,

    /// When present, replaces the item list wholesale
    #[serde(default)]
    pub items: Option<Vec<CreateItineraryItemRequest>>,
}
