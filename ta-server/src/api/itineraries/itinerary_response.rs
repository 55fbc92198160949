use crate::api::itineraries::itinerary_dto::ItineraryDto;

use serde::Serialize;

/// Single itinerary response
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: ItineraryDto,
}
