//! Payment REST API handlers. Payments record money moving against an
//! invoice; like vendors they are never deleted, only corrected.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::payments::create_payment_request::CreatePaymentRequest;
use crate::api::payments::payment_dto::PaymentDto;
use crate::api::payments::payment_list_response::PaymentListResponse;
use crate::api::payments::payment_response::PaymentResponse;
use crate::api::payments::update_payment_request::UpdatePaymentRequest;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::Payment;
use ta_db::{InvoiceRepository, PaymentRepository};

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GET /api/payments
pub async fn list_payments(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<PaymentListResponse>> {
    let repo = PaymentRepository::new(state.pool.clone());
    let payments = repo.find_all(claims.tenant_id).await?;

    Ok(Json(PaymentListResponse {
        payments: payments.into_iter().map(PaymentDto::from).collect(),
    }))
}

/// GET /api/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<PaymentResponse>> {
    let payment_id = Uuid::parse_str(&id)?;

    let repo = PaymentRepository::new(state.pool.clone());
    let payment = repo
        .find_by_id(claims.tenant_id, payment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Payment {} not found", id)))?;

    Ok(Json(PaymentResponse {
        payment: payment.into(),
    }))
}

/// POST /api/payments
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreatePaymentRequest>,
) -> ApiResult<Response> {
    if request.amount < 0.0 {
        return Err(ApiError::validation(
            "Amount must not be negative",
            Some("amount"),
        ));
    }

    let invoice_id = Uuid::parse_str(&request.invoice_id)?;
    check_invoice_exists(&state, claims.tenant_id, invoice_id).await?;

    let now = Utc::now();
    let payment_date = match request.payment_date {
        Some(secs) => parse_timestamp(secs, "paymentDate")?,
        None => now,
    };

    let payment = Payment {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        invoice_id,
        payment_date,
        amount: request.amount,
        method: request.method,
        status: request.status.unwrap_or_else(|| "Pending".to_string()),
        created_at: now,
        updated_at: now,
    };

    let repo = PaymentRepository::new(state.pool.clone());
    repo.create(&payment).await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentResponse {
            payment: payment.into(),
        }),
    )
        .into_response())
}

/// PUT /api/payments/{id}
pub async fn update_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePaymentRequest>,
) -> ApiResult<Json<PaymentResponse>> {
    let payment_id = Uuid::parse_str(&id)?;

    let repo = PaymentRepository::new(state.pool.clone());
    let mut payment = repo
        .find_by_id(claims.tenant_id, payment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Payment {} not found", id)))?;

    if let Some(invoice_id) = request.invoice_id {
        let invoice_id = Uuid::parse_str(&invoice_id)?;
        check_invoice_exists(&state, claims.tenant_id, invoice_id).await?;
        payment.invoice_id = invoice_id;
    }
    if let Some(payment_date) = request.payment_date {
        payment.payment_date = parse_timestamp(payment_date, "paymentDate")?;
    }
    if let Some(amount) = request.amount {
        if amount < 0.0 {
            return Err(ApiError::validation(
                "Amount must not be negative",
                Some("amount"),
            ));
        }
        payment.amount = amount;
    }
    if let Some(method) = request.method {
        payment.method = Some(method);
    }
    if let Some(status) = request.status {
        payment.status = status;
    }

    payment.updated_at = Utc::now();
    repo.update(&payment).await?;

    Ok(Json(PaymentResponse {
        payment: payment.into(),
    }))
}

/// A payment may only reference an invoice in the caller's tenant.
async fn check_invoice_exists(
    state: &AppState,
    tenant_id: Uuid,
    invoice_id: Uuid,
) -> ApiResult<()> {
    let repo = InvoiceRepository::new(state.pool.clone());
    match repo.find_by_id(tenant_id, invoice_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::validation(
            format!("Invoice {} not found", invoice_id),
            Some("invoiceId"),
        )),
    }
}

fn parse_timestamp(secs: i64, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}
