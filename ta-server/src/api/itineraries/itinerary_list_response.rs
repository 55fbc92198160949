use crate::api::itineraries::itinerary_dto::ItineraryDto;

use serde::Serialize;

/// List of itineraries response
#[derive(Debug, Serialize)]
pub struct ItineraryListResponse {
    pub itineraries: Vec<ItineraryDto>,
}
