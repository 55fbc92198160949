//! Vendor REST API handlers. Vendors are reference data for purchase
//! invoices, so there is no delete endpoint.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::vendors::create_vendor_request::CreateVendorRequest;
use crate::api::vendors::update_vendor_request::UpdateVendorRequest;
use crate::api::vendors::vendor_dto::VendorDto;
use crate::api::vendors::vendor_list_response::VendorListResponse;
use crate::api::vendors::vendor_response::VendorResponse;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::Vendor;
use ta_db::VendorRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

/// GET /api/vendors
pub async fn list_vendors(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<VendorListResponse>> {
    let repo = VendorRepository::new(state.pool.clone());
    let vendors = repo.find_all(claims.tenant_id).await?;

    Ok(Json(VendorListResponse {
        vendors: vendors.into_iter().map(VendorDto::from).collect(),
    }))
}

/// GET /api/vendors/{id}
pub async fn get_vendor(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<VendorResponse>> {
    let vendor_id = Uuid::parse_str(&id)?;

    let repo = VendorRepository::new(state.pool.clone());
    let vendor = repo
        .find_by_id(claims.tenant_id, vendor_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Vendor {} not found", id)))?;

    Ok(Json(VendorResponse {
        vendor: vendor.into(),
    }))
}

/// POST /api/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateVendorRequest>,
) -> ApiResult<Response> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be empty", Some("name")));
    }

    let now = Utc::now();
    let vendor = Vendor {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        name: request.name,
        vendor_type: request.vendor_type,
        contact_person: request.contact_person,
        contact_info: request.contact_info,
        payment_terms: request.payment_terms,
        created_at: now,
        updated_at: now,
    };

    let repo = VendorRepository::new(state.pool.clone());
    repo.create(&vendor).await?;

    Ok((
        StatusCode::CREATED,
        Json(VendorResponse {
            vendor: vendor.into(),
        }),
    )
        .into_response())
}

/// PUT /api/vendors/{id}
pub async fn update_vendor(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateVendorRequest>,
) -> ApiResult<Json<VendorResponse>> {
    let vendor_id = Uuid::parse_str(&id)?;

    let repo = VendorRepository::new(state.pool.clone());
    let mut vendor = repo
        .find_by_id(claims.tenant_id, vendor_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Vendor {} not found", id)))?;

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Name must not be empty", Some("name")));
        }
        vendor.name = name;
    }
    if let Some(vendor_type) = request.vendor_type {
        vendor.vendor_type = Some(vendor_type);
    }
    if let Some(contact_person) = request.contact_person {
        vendor.contact_person = Some(contact_person);
    }
    if let Some(contact_info) = request.contact_info {
        vendor.contact_info = Some(contact_info);
    }
    if let Some(payment_terms) = request.payment_terms {
        vendor.payment_terms = Some(payment_terms);
    }

    vendor.updated_at = Utc::now();
    repo.update(&vendor).await?;

    Ok(Json(VendorResponse {
        vendor: vendor.into(),
    }))
}
