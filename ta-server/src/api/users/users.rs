//! Self-service profile handlers. The acting user comes from the verified
//! claims; no user id is ever taken from the request body or path here.

use crate::api::auth::user_dto::UserDto;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::users::reset_password_request::ResetPasswordRequest;
use crate::api::users::update_profile_request::UpdateProfileRequest;
use crate::api::users::user_response::UserResponse;
use crate::state::AppState;

use ta_auth::{Claims, hash_password, verify_password};
use ta_db::UserRepository;

use axum::{Extension, Json, extract::State};
use chrono::Utc;

/// GET /api/user/profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(claims.tenant_id, claims.sub)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/user/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let mut user = repo
        .find_by_id(claims.tenant_id, claims.sub)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Name must not be empty", Some("name")));
        }
        user.name = name;
    }

    if let Some(email) = request.email
        && email != user.email
    {
        if !email.contains('@') {
            return Err(ApiError::validation(
                "A valid email address is required",
                Some("email"),
            ));
        }
        if repo
            .find_by_email_and_tenant(&email, claims.tenant_id)
            .await?
            .is_some()
        {
            return Err(ApiError::conflict("Email is already registered for this tenant"));
        }
        user.email = email;
    }

    user.updated_at = Utc::now();
    repo.update(&user).await?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// PUT /api/user/reset-password
///
/// Requires the current password even under force_password_change; a
/// successful reset clears that flag.
pub async fn reset_password(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<ResetPasswordRequest>,
) -> ApiResult<Json<UserResponse>> {
    if request.new_password.len() < 8 {
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
            Some("newPassword"),
        ));
    }

    let repo = UserRepository::new(state.pool.clone());
    let mut user = repo
        .find_by_id(claims.tenant_id, claims.sub)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !verify_password(&request.current_password, &user.password_hash)? {
        return Err(ApiError::invalid_credentials());
    }

    user.password_hash = hash_password(&request.new_password)?;
    user.force_password_change = false;
    user.updated_at = Utc::now();
    repo.update(&user).await?;

    log::info!("Password reset for user {}", user.id);

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}
