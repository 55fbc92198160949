pub mod booking_dto;
pub mod booking_list_response;
pub mod booking_response;
pub mod bookings;
pub mod create_booking_request;
pub mod update_booking_request;
