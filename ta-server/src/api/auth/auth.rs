//! Authentication handlers: register, login, refresh.
//!
//! Tokens travel both in the JSON body and as HttpOnly cookies so browser
//! and non-browser clients can use the same endpoints.

use crate::api::auth::auth_response::AuthResponse;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::refresh_request::RefreshRequest;
use crate::api::auth::refresh_response::RefreshResponse;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::auth::register_response::RegisterResponse;
use crate::api::auth::user_dto::UserDto;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use ta_auth::{AuthError, hash_password, verify_password};
use ta_core::{Role, User};
use ta_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 8;

/// POST /api/auth/register
///
/// Creates an account under the given tenant. The role must name one of
/// the known roles and defaults to a regular user.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Response> {
    let tenant_id = Uuid::parse_str(&request.tenant_id)?;

    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be empty", Some("name")));
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(ApiError::validation(
            "A valid email address is required",
            Some("email"),
        ));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            Some("password"),
        ));
    }

    let repo = UserRepository::new(state.pool.clone());

    if repo
        .find_by_email_and_tenant(&request.email, tenant_id)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Email is already registered for this tenant"));
    }

    let role = match request.role.as_deref() {
        Some(value) => value
            .parse::<Role>()
            .map_err(|_| ApiError::validation(format!("Unknown role: {}", value), Some("role")))?,
        None => Role::User,
    };

    let password_hash = hash_password(&request.password)?;
    let user = User::new(tenant_id, request.name, request.email, password_hash, role);

    repo.create(&user).await?;

    log::info!("Registered user {} in tenant {}", user.id, tenant_id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user: user.into() }),
    )
        .into_response())
}

/// POST /api/auth/login
///
/// Verifies the password before the active flag so that the response does
/// not reveal whether a disabled account's password was correct.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(&request.email)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(ApiError::invalid_credentials());
    }

    if !user.is_active {
        return Err(ApiError::account_disabled());
    }

    let access_token = state.issuer.issue_access(user.id, user.tenant_id, user.role)?;
    let refresh_token = state
        .issuer
        .issue_refresh(user.id, user.tenant_id, user.role)?;

    log::info!("User {} logged in (tenant {})", user.id, user.tenant_id);

    let secure = is_https(&headers);
    let mut response_headers = HeaderMap::new();
    append_cookie(
        &mut response_headers,
        "accessToken",
        &access_token,
        state.issuer.access_ttl_secs(),
        secure,
    )?;
    append_cookie(
        &mut response_headers,
        "refreshToken",
        &refresh_token,
        state.issuer.refresh_ttl_secs(),
        secure,
    )?;

    let body = AuthResponse {
        access_token,
        refresh_token,
        force_password_change: user.force_password_change,
        user: UserDto::from(user),
    };

    Ok((StatusCode::OK, response_headers, Json(body)).into_response())
}

/// POST /api/auth/refresh
///
/// Exchanges a valid refresh token for a fresh access token. The user is
/// re-resolved from storage so deleted or deactivated accounts cannot keep
/// minting access tokens for the remainder of the refresh window.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<Response> {
    let claims = state.validator.validate_refresh(&request.refresh_token)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(claims.tenant_id, claims.sub)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| {
            ApiError::from(AuthError::UnknownUser {
                user_id: claims.sub,
                location: ErrorLocation::from(Location::caller()),
            })
        })?;

    let access_token = state.issuer.issue_access(user.id, user.tenant_id, user.role)?;

    let secure = is_https(&headers);
    let mut response_headers = HeaderMap::new();
    append_cookie(
        &mut response_headers,
        "accessToken",
        &access_token,
        state.issuer.access_ttl_secs(),
        secure,
    )?;

    Ok((
        StatusCode::OK,
        response_headers,
        Json(RefreshResponse { access_token }),
    )
        .into_response())
}

/// Secure cookies when the request arrived over TLS (terminated upstream).
fn is_https(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

fn append_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    max_age_secs: i64,
    secure: bool,
) -> ApiResult<()> {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        name, value, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }

    let header_value = cookie
        .parse()
        .map_err(|_| ApiError::internal("Failed to encode cookie header"))?;
    headers.append(SET_COOKIE, header_value);

    Ok(())
}
