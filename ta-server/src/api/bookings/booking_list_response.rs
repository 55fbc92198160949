use crate::api::bookings::booking_dto::BookingDto;

use serde::Serialize;

/// List of bookings response
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingDto>,
}
