//! Agent provisioning, admin only. New agents get a generated temporary
//! password delivered by email and must change it on first login.

use crate::api::admin::agent_list_response::AgentListResponse;
use crate::api::admin::agent_response::AgentResponse;
use crate::api::admin::create_agent_request::CreateAgentRequest;
use crate::api::admin::update_agent_request::UpdateAgentRequest;
use crate::api::auth::user_dto::UserDto;
use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use ta_auth::{Claims, hash_password};
use ta_core::{Role, User};
use ta_db::UserRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

const TEMP_PASSWORD_LEN: usize = 12;

/// GET /api/admin/agents
pub async fn list_agents(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<AgentListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all(claims.tenant_id).await?;

    Ok(Json(AgentListResponse {
        agents: users
            .into_iter()
            .filter(|u| u.role == Role::Agent)
            .map(UserDto::from)
            .collect(),
    }))
}

/// POST /api/admin/agents
pub async fn create_agent(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateAgentRequest>,
) -> ApiResult<Response> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be empty", Some("name")));
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(ApiError::validation(
            "A valid email address is required",
            Some("email"),
        ));
    }

    let repo = UserRepository::new(state.pool.clone());

    if repo
        .find_by_email_and_tenant(&request.email, claims.tenant_id)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Email is already registered for this tenant"));
    }

    let temp_password = generate_temp_password();
    let password_hash = hash_password(&temp_password)?;

    let mut agent = User::new(
        claims.tenant_id,
        request.name,
        request.email,
        password_hash,
        Role::Agent,
    );
    agent.force_password_change = true;

    repo.create(&agent).await?;

    state.mailer.send(
        &agent.email,
        "Your agent account",
        &format!(
            "An account has been created for you. Temporary password: {}\n\
             You will be asked to change it on first login.",
            temp_password
        ),
    );

    log::info!("Provisioned agent {} in tenant {}", agent.id, claims.tenant_id);

    Ok((
        StatusCode::CREATED,
        Json(AgentResponse {
            agent: agent.into(),
        }),
    )
        .into_response())
}

/// PUT /api/admin/agents/{id}
pub async fn update_agent(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAgentRequest>,
) -> ApiResult<Json<AgentResponse>> {
    let agent_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let mut agent = repo
        .find_by_id(claims.tenant_id, agent_id)
        .await?
        .filter(|u| u.role == Role::Agent)
        .ok_or_else(|| ApiError::not_found(format!("Agent {} not found", id)))?;

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Name must not be empty", Some("name")));
        }
        agent.name = name;
    }

    if let Some(email) = request.email
        && email != agent.email
    {
        if repo
            .find_by_email_and_tenant(&email, claims.tenant_id)
            .await?
            .is_some()
        {
            return Err(ApiError::conflict("Email is already registered for this tenant"));
        }
        agent.email = email;
    }

    if let Some(is_active) = request.is_active {
        agent.is_active = is_active;
    }

    agent.updated_at = Utc::now();
    repo.update(&agent).await?;

    Ok(Json(AgentResponse {
        agent: agent.into(),
    }))
}

/// DELETE /api/admin/agents/{id}
pub async fn delete_agent(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let agent_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    repo.find_by_id(claims.tenant_id, agent_id)
        .await?
        .filter(|u| u.role == Role::Agent)
        .ok_or_else(|| ApiError::not_found(format!("Agent {} not found", id)))?;

    repo.delete(claims.tenant_id, agent_id).await?;

    log::info!("Deleted agent {} in tenant {}", agent_id, claims.tenant_id);

    Ok(Json(DeleteResponse { deleted: true }))
}

fn generate_temp_password() -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(TEMP_PASSWORD_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{TEMP_PASSWORD_LEN, generate_temp_password};

    #[test]
    fn given_generated_password_then_it_is_alphanumeric_of_fixed_length() {
        let password = generate_temp_password();
        assert_eq!(password.len(), TEMP_PASSWORD_LEN);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn given_two_generated_passwords_then_they_differ() {
        assert_ne!(generate_temp_password(), generate_temp_password());
    }
}
