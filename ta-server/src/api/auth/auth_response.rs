use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// Login response: both tokens plus the authenticated user.
///
/// `force_password_change` is duplicated at the top level so clients can
/// branch on it without digging into the user object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub force_password_change: bool,
    pub user: UserDto,
}
