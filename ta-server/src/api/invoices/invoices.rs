//! Invoice REST API handlers.

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::invoices::create_invoice_request::CreateInvoiceRequest;
use crate::api::invoices::invoice_dto::InvoiceDto;
use crate::api::invoices::invoice_list_response::InvoiceListResponse;
use crate::api::invoices::invoice_response::InvoiceResponse;
use crate::api::invoices::update_invoice_request::UpdateInvoiceRequest;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::{AuditLog, Invoice};
use ta_db::InvoiceRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GET /api/invoices
pub async fn list_invoices(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<InvoiceListResponse>> {
    let repo = InvoiceRepository::new(state.pool.clone());
    let invoices = repo.find_all(claims.tenant_id).await?;

    Ok(Json(InvoiceListResponse {
        invoices: invoices.into_iter().map(InvoiceDto::from).collect(),
    }))
}

/// GET /api/invoices/{id}
pub async fn get_invoice(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<InvoiceResponse>> {
    let invoice_id = Uuid::parse_str(&id)?;

    let repo = InvoiceRepository::new(state.pool.clone());
    let invoice = repo
        .find_by_id(claims.tenant_id, invoice_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Invoice {} not found", id)))?;

    Ok(Json(InvoiceResponse {
        invoice: invoice.into(),
    }))
}

/// POST /api/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateInvoiceRequest>,
) -> ApiResult<Response> {
    if request.invoice_type != "sale" && request.invoice_type != "purchase" {
        return Err(ApiError::validation(
            "Invoice type must be 'sale' or 'purchase'",
            Some("invoiceType"),
        ));
    }
    if request.amount < 0.0 {
        return Err(ApiError::validation(
            "Amount must not be negative",
            Some("amount"),
        ));
    }

    let now = Utc::now();
    let issue_date = match request.issue_date {
        Some(secs) => parse_timestamp(secs, "issueDate")?,
        None => now,
    };
    let due_date = parse_timestamp(request.due_date, "dueDate")?;

    let invoice = Invoice {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        invoice_type: request.invoice_type,
        issue_date,
        due_date,
        status: "Draft".to_string(),
        amount: request.amount,
        currency: request.currency.unwrap_or_else(|| "USD".to_string()),
        customer_id: request
            .customer_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        vendor_id: request
            .vendor_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        created_at: now,
        updated_at: now,
    };

    // The audit row commits atomically with the invoice.
    let audit = AuditLog {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        user_id: claims.sub,
        action: "CREATE_INVOICE".to_string(),
        entity: "Invoice".to_string(),
        entity_id: Some(invoice.id),
        details: Some("Created invoice".to_string()),
        created_at: now,
    };

    let repo = InvoiceRepository::new(state.pool.clone());
    repo.create(&invoice, &audit).await?;

    Ok((
        StatusCode::CREATED,
        Json(InvoiceResponse {
            invoice: invoice.into(),
        }),
    )
        .into_response())
}

/// PUT /api/invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> ApiResult<Json<InvoiceResponse>> {
    let invoice_id = Uuid::parse_str(&id)?;

    let repo = InvoiceRepository::new(state.pool.clone());
    let mut invoice = repo
        .find_by_id(claims.tenant_id, invoice_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Invoice {} not found", id)))?;

    if let Some(invoice_type) = request.invoice_type {
        if invoice_type != "sale" && invoice_type != "purchase" {
            return Err(ApiError::validation(
                "Invoice type must be 'sale' or 'purchase'",
                Some("invoiceType"),
            ));
        }
        invoice.invoice_type = invoice_type;
    }
    if let Some(issue_date) = request.issue_date {
        invoice.issue_date = parse_timestamp(issue_date, "issueDate")?;
    }
    if let Some(due_date) = request.due_date {
        invoice.due_date = parse_timestamp(due_date, "dueDate")?;
    }
    if let Some(status) = request.status {
        invoice.status = status;
    }
    if let Some(amount) = request.amount {
        if amount < 0.0 {
            return Err(ApiError::validation(
                "Amount must not be negative",
                Some("amount"),
            ));
        }
        invoice.amount = amount;
    }
    if let Some(currency) = request.currency {
        invoice.currency = currency;
    }
    if let Some(customer_id) = request.customer_id {
        invoice.customer_id = Some(Uuid::parse_str(&customer_id)?);
    }
    if let Some(vendor_id) = request.vendor_id {
        invoice.vendor_id = Some(Uuid::parse_str(&vendor_id)?);
    }

    invoice.updated_at = Utc::now();
    repo.update(&invoice).await?;

    Ok(Json(InvoiceResponse {
        invoice: invoice.into(),
    }))
}

/// DELETE /api/invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let invoice_id = Uuid::parse_str(&id)?;

    let repo = InvoiceRepository::new(state.pool.clone());
    let affected = repo.delete(claims.tenant_id, invoice_id).await?;

    if affected == 0 {
        return Err(ApiError::not_found(format!("Invoice {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

fn parse_timestamp(secs: i64, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}
