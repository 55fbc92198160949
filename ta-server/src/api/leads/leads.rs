//! Lead REST API handlers. The tenant always comes from the verified
//! claims; rows in other tenants are indistinguishable from missing rows.

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::leads::create_lead_request::CreateLeadRequest;
use crate::api::leads::lead_dto::LeadDto;
use crate::api::leads::lead_list_response::LeadListResponse;
use crate::api::leads::lead_response::LeadResponse;
use crate::api::leads::update_lead_request::UpdateLeadRequest;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::Lead;
use ta_db::LeadRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GET /api/leads
pub async fn list_leads(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<LeadListResponse>> {
    let repo = LeadRepository::new(state.pool.clone());
    let leads = repo.find_all(claims.tenant_id).await?;

    Ok(Json(LeadListResponse {
        leads: leads.into_iter().map(LeadDto::from).collect(),
    }))
}

/// GET /api/leads/{id}
pub async fn get_lead(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<LeadResponse>> {
    let lead_id = Uuid::parse_str(&id)?;

    let repo = LeadRepository::new(state.pool.clone());
    let lead = repo
        .find_by_id(claims.tenant_id, lead_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Lead {} not found", id)))?;

    Ok(Json(LeadResponse { lead: lead.into() }))
}

/// POST /api/leads
pub async fn create_lead(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateLeadRequest>,
) -> ApiResult<Response> {
    if request.customer_name.trim().is_empty() {
        return Err(ApiError::validation(
            "Customer name must not be empty",
            Some("customerName"),
        ));
    }
    if request.contact_info.trim().is_empty() {
        return Err(ApiError::validation(
            "Contact info must not be empty",
            Some("contactInfo"),
        ));
    }

    let now = Utc::now();
    let lead = Lead {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        customer_name: request.customer_name,
        contact_info: request.contact_info,
        phone: request.phone,
        destination: request.destination,
        budget: request.budget.unwrap_or(0.0),
        travel_date: request.travel_date.and_then(|s| DateTime::from_timestamp(s, 0)),
        details: request.details,
        status: "New".to_string(),
        assigned_to: None,
        created_at: now,
        updated_at: now,
    };

    let repo = LeadRepository::new(state.pool.clone());
    repo.create(&lead).await?;

    Ok((
        StatusCode::CREATED,
        Json(LeadResponse { lead: lead.into() }),
    )
        .into_response())
}

/// PUT /api/leads/{id}
pub async fn update_lead(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateLeadRequest>,
) -> ApiResult<Json<LeadResponse>> {
    let lead_id = Uuid::parse_str(&id)?;

    let repo = LeadRepository::new(state.pool.clone());
    let mut lead = repo
        .find_by_id(claims.tenant_id, lead_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Lead {} not found", id)))?;

    if let Some(customer_name) = request.customer_name {
        lead.customer_name = customer_name;
    }
    if let Some(contact_info) = request.contact_info {
        lead.contact_info = contact_info;
    }
    if let Some(phone) = request.phone {
        lead.phone = Some(phone);
    }
    if let Some(destination) = request.destination {
        lead.destination = Some(destination);
    }
    if let Some(budget) = request.budget {
        lead.budget = budget;
    }
    if let Some(travel_date) = request.travel_date {
        lead.travel_date = DateTime::from_timestamp(travel_date, 0);
    }
    if let Some(details) = request.details {
        lead.details = Some(details);
    }
    if let Some(status) = request.status {
        lead.status = status;
    }
    if let Some(assigned_to) = request.assigned_to {
        lead.assigned_to = Some(Uuid::parse_str(&assigned_to)?);
    }

    lead.updated_at = Utc::now();
    repo.update(&lead).await?;

    Ok(Json(LeadResponse { lead: lead.into() }))
}

/// DELETE /api/leads/{id}
pub async fn delete_lead(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let lead_id = Uuid::parse_str(&id)?;

    let repo = LeadRepository::new(state.pool.clone());
    let affected = repo.delete(claims.tenant_id, lead_id).await?;

    if affected == 0 {
        return Err(ApiError::not_found(format!("Lead {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}
