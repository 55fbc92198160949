use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Tenant the account is created under
    pub tenant_id: String,

    /// One of "admin", "agent", "user"; defaults to "user"
    #[serde(default)]
    pub role: Option<String>,
}
