use serde::Serialize;

/// Refresh mints a new access token only; the refresh token is unchanged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}
