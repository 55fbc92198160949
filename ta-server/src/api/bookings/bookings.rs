//! Booking REST API handlers.

use crate::api::bookings::booking_dto::BookingDto;
use crate::api::bookings::booking_list_response::BookingListResponse;
use crate::api::bookings::booking_response::BookingResponse;
use crate::api::bookings::create_booking_request::CreateBookingRequest;
use crate::api::bookings::update_booking_request::UpdateBookingRequest;
use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::Booking;
use ta_db::BookingRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<BookingListResponse>> {
    let repo = BookingRepository::new(state.pool.clone());
    let bookings = repo.find_all(claims.tenant_id).await?;

    Ok(Json(BookingListResponse {
        bookings: bookings.into_iter().map(BookingDto::from).collect(),
    }))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking_id = Uuid::parse_str(&id)?;

    let repo = BookingRepository::new(state.pool.clone());
    let booking = repo
        .find_by_id(claims.tenant_id, booking_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Booking {} not found", id)))?;

    Ok(Json(BookingResponse {
        booking: booking.into(),
    }))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateBookingRequest>,
) -> ApiResult<Response> {
    let now = Utc::now();

    let booking_date = match request.booking_date {
        Some(secs) => parse_timestamp(secs, "bookingDate")?,
        None => now,
    };

    let booking = Booking {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        itinerary_id: request
            .itinerary_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        booking_ref: request.booking_ref,
        status: "Pending".to_string(),
        booking_date,
        travel_date: request
            .travel_date
            .map(|s| parse_timestamp(s, "travelDate"))
            .transpose()?,
        cost: request.cost.unwrap_or(0.0),
        price: request.price.unwrap_or(0.0),
        created_at: now,
        updated_at: now,
    };

    let repo = BookingRepository::new(state.pool.clone());
    repo.create(&booking).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking: booking.into(),
        }),
    )
        .into_response())
}

/// PUT /api/bookings/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBookingRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let booking_id = Uuid::parse_str(&id)?;

    let repo = BookingRepository::new(state.pool.clone());
    let mut booking = repo
        .find_by_id(claims.tenant_id, booking_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Booking {} not found", id)))?;

    if let Some(itinerary_id) = request.itinerary_id {
        booking.itinerary_id = Some(Uuid::parse_str(&itinerary_id)?);
    }
    if let Some(booking_ref) = request.booking_ref {
        booking.booking_ref = Some(booking_ref);
    }
    if let Some(status) = request.status {
        booking.status = status;
    }
    if let Some(booking_date) = request.booking_date {
        booking.booking_date = parse_timestamp(booking_date, "bookingDate")?;
    }
    if let Some(travel_date) = request.travel_date {
        booking.travel_date = Some(parse_timestamp(travel_date, "travelDate")?);
    }
    if let Some(cost) = request.cost {
        booking.cost = cost;
    }
    if let Some(price) = request.price {
        booking.price = price;
    }

    booking.updated_at = Utc::now();
    repo.update(&booking).await?;

    Ok(Json(BookingResponse {
        booking: booking.into(),
    }))
}

/// DELETE /api/bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let booking_id = Uuid::parse_str(&id)?;

    let repo = BookingRepository::new(state.pool.clone());
    let affected = repo.delete(claims.tenant_id, booking_id).await?;

    if affected == 0 {
        return Err(ApiError::not_found(format!("Booking {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

fn parse_timestamp(secs: i64, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}
