//! Role gate layered after authentication. Reads the claims that
//! `authenticate` stored in request extensions.

use crate::api::error::{ApiError, Result as ApiResult};

use ta_auth::{AuthError, Claims};
use ta_core::Role;

use std::panic::Location;

use axum::{extract::Request, middleware::Next, response::Response};
use error_location::ErrorLocation;

pub async fn require_role(
    allowed: &'static [Role],
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| ApiError::internal("Role gate reached without authenticated claims"))?;

    if !allowed.contains(&claims.role) {
        return Err(AuthError::InsufficientRole {
            role: claims.role,
            location: ErrorLocation::from(Location::caller()),
        }
        .into());
    }

    Ok(next.run(request).await)
}
