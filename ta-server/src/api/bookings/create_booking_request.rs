use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub itinerary_id: Option<String>,

    #[serde(default)]
    pub booking_ref: Option<String>,

    /// Unix seconds; defaults to now
    #[serde(default)]
    pub booking_date: Option<i64>,

    /// Unix seconds
    #[serde(default)]
    pub travel_date: Option<i64>,

    #[serde(default)]
    pub cost: Option<f64>,

    #[serde(default)]
    pub price: Option<f64>,
}
