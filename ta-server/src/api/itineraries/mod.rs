pub mod create_itinerary_request;
pub mod itineraries;
pub mod itinerary_dto;
pub mod itinerary_item_dto;
pub mod itinerary_list_response;
pub mod itinerary_response;
pub mod update_itinerary_request;
