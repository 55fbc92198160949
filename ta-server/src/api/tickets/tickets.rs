//! Support ticket REST API handlers. Tickets are create/read only; status
//! workflow beyond opening them is handled elsewhere.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::tickets::create_ticket_request::CreateTicketRequest;
use crate::api::tickets::ticket_dto::TicketDto;
use crate::api::tickets::ticket_list_response::TicketListResponse;
use crate::api::tickets::ticket_response::TicketResponse;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::Ticket;
use ta_db::TicketRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

/// GET /api/tickets
pub async fn list_tickets(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<TicketListResponse>> {
    let repo = TicketRepository::new(state.pool.clone());
    let tickets = repo.find_all(claims.tenant_id).await?;

    Ok(Json(TicketListResponse {
        tickets: tickets.into_iter().map(TicketDto::from).collect(),
    }))
}

/// GET /api/tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<TicketResponse>> {
    let ticket_id = Uuid::parse_str(&id)?;

    let repo = TicketRepository::new(state.pool.clone());
    let ticket = repo
        .find_by_id(claims.tenant_id, ticket_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Ticket {} not found", id)))?;

    Ok(Json(TicketResponse {
        ticket: ticket.into(),
    }))
}

/// POST /api/tickets
pub async fn create_ticket(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateTicketRequest>,
) -> ApiResult<Response> {
    if request.subject.trim().is_empty() {
        return Err(ApiError::validation(
            "Subject must not be empty",
            Some("subject"),
        ));
    }

    let now = Utc::now();
    let ticket = Ticket {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        subject: request.subject,
        description: request.description,
        customer_id: request
            .customer_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        assigned_to: request
            .assigned_to
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        status: "Open".to_string(),
        priority: request.priority.unwrap_or_else(|| "Normal".to_string()),
        created_at: now,
        updated_at: now,
    };

    let repo = TicketRepository::new(state.pool.clone());
    repo.create(&ticket).await?;

    Ok((
        StatusCode::CREATED,
        Json(TicketResponse {
            ticket: ticket.into(),
        }),
    )
        .into_response())
}
