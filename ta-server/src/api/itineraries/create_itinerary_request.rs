use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItineraryRequest {
    pub name: String,

    /// Unix seconds
    pub start_date: i64,

    /// Unix seconds
    pub end_date: i64,

    #[serde(default)]
    pub customer_id: Option<String>,

    /// Defaults to the sum of item prices when omitted
    #[serde(default)]
    pub total_price: Option<f64>,

    #[serde(default)]
    pub items: Vec<CreateItineraryItemRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItineraryItemRequest {
    /// 1-based day within the itinerary
    pub day: i32,

    pub item_type: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cost: Option<f64>,

    #[serde(default)]
    pub price: Option<f64>,
}
