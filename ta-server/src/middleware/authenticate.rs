//! Request authentication. Validates the bearer access token and stores
//! the verified claims in request extensions for handlers downstream.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use ta_auth::AuthError;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = bearer_token(request.headers())?;
    let claims = state.validator.validate_access(token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Pulls the token out of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> ApiResult<&str> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::from(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        }))?;

    let value = header.to_str().map_err(|_| {
        ApiError::from(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
    })?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::from(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }))?;

    if token.is_empty() {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }
        .into());
    }

    Ok(token)
}
