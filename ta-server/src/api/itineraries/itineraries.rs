//! Itinerary REST API handlers. Item lists are replaced as a whole on
//! update; per-item editing is not exposed.

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::itineraries::create_itinerary_request::{
    CreateItineraryItemRequest, CreateItineraryRequest,
};
use crate::api::itineraries::itinerary_dto::ItineraryDto;
use crate::api::itineraries::itinerary_list_response::ItineraryListResponse;
use crate::api::itineraries::itinerary_response::ItineraryResponse;
use crate::api::itineraries::update_itinerary_request::UpdateItineraryRequest;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::{Itinerary, ItineraryItem};
use ta_db::ItineraryRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GET /api/itineraries
pub async fn list_itineraries(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<ItineraryListResponse>> {
    let repo = ItineraryRepository::new(state.pool.clone());
    let itineraries = repo.find_all(claims.tenant_id).await?;

    Ok(Json(ItineraryListResponse {
        itineraries: itineraries.into_iter().map(ItineraryDto::from).collect(),
    }))
}

/// GET /api/itineraries/{id}
pub async fn get_itinerary(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<ItineraryResponse>> {
    let itinerary_id = Uuid::parse_str(&id)?;

    let repo = ItineraryRepository::new(state.pool.clone());
    let itinerary = repo
        .find_by_id(claims.tenant_id, itinerary_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Itinerary {} not found", id)))?;

    Ok(Json(ItineraryResponse {
        itinerary: itinerary.into(),
    }))
}

/// POST /api/itineraries
pub async fn create_itinerary(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateItineraryRequest>,
) -> ApiResult<Response> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be empty", Some("name")));
    }

    let start_date = parse_timestamp(request.start_date, "startDate")?;
    let end_date = parse_timestamp(request.end_date, "endDate")?;
    if end_date < start_date {
        return Err(ApiError::validation(
            "End date must not precede start date",
            Some("endDate"),
        ));
    }

    let customer_id = request
        .customer_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let now = Utc::now();
    let itinerary_id = Uuid::new_v4();
    let items = build_items(itinerary_id, request.items, now)?;

    let total_price = request
        .total_price
        .unwrap_or_else(|| items.iter().map(|i| i.price).sum());

    let itinerary = Itinerary {
        id: itinerary_id,
        tenant_id: claims.tenant_id,
        customer_id,
        name: request.name,
        start_date,
        end_date,
        status: "Planned".to_string(),
        total_price,
        items,
        created_at: now,
        updated_at: now,
    };

    let repo = ItineraryRepository::new(state.pool.clone());
    repo.create(&itinerary).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItineraryResponse {
            itinerary: itinerary.into(),
        }),
    )
        .into_response())
}

/// PUT /api/itineraries/{id}
pub async fn update_itinerary(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateItineraryRequest>,
) -> ApiResult<Json<ItineraryResponse>> {
    let itinerary_id = Uuid::parse_str(&id)?;

    let repo = ItineraryRepository::new(state.pool.clone());
    let mut itinerary = repo
        .find_by_id(claims.tenant_id, itinerary_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Itinerary {} not found", id)))?;

    if let Some(name) = request.name {
        itinerary.name = name;
    }
    if let Some(start_date) = request.start_date {
        itinerary.start_date = parse_timestamp(start_date, "startDate")?;
    }
    if let Some(end_date) = request.end_date {
        itinerary.end_date = parse_timestamp(end_date, "endDate")?;
    }
    if itinerary.end_date < itinerary.start_date {
        return Err(ApiError::validation(
            "End date must not precede start date",
            Some("endDate"),
        ));
    }
    if let Some(customer_id) = request.customer_id {
        itinerary.customer_id = Some(Uuid::parse_str(&customer_id)?);
    }
    if let Some(status) = request.status {
        itinerary.status = status;
    }

    let now = Utc::now();
    if let Some(items) = request.items {
        itinerary.items = build_items(itinerary.id, items, now)?;
    }
    if let Some(total_price) = request.total_price {
        itinerary.total_price = total_price;
    }

    itinerary.updated_at = now;
    repo.update(&itinerary).await?;

    Ok(Json(ItineraryResponse {
        itinerary: itinerary.into(),
    }))
}

/// DELETE /api/itineraries/{id}
pub async fn delete_itinerary(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let itinerary_id = Uuid::parse_str(&id)?;

    let repo = ItineraryRepository::new(state.pool.clone());
    let affected = repo.delete(claims.tenant_id, itinerary_id).await?;

    if affected == 0 {
        return Err(ApiError::not_found(format!("Itinerary {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

fn parse_timestamp(secs: i64, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}

fn build_items(
    itinerary_id: Uuid,
    requests: Vec<CreateItineraryItemRequest>,
    now: DateTime<Utc>,
) -> ApiResult<Vec<ItineraryItem>> {
    requests
        .into_iter()
        .map(|r| {
            if r.day < 1 {
                return Err(ApiError::validation("Item day must be at least 1", Some("day")));
            }
            if r.item_type.trim().is_empty() {
                return Err(ApiError::validation(
                    "Item type must not be empty",
                    Some("itemType"),
                ));
            }
            Ok(ItineraryItem {
                id: Uuid::new_v4(),
                itinerary_id,
                day: r.day,
                item_type: r.item_type,
                description: r.description,
                cost: r.cost.unwrap_or(0.0),
                price: r.price.unwrap_or(0.0),
                status: "Pending".to_string(),
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}
