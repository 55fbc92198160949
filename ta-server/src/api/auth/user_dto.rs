use ta_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub force_password_change: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            tenant_id: u.tenant_id.to_string(),
            name: u.name,
            email: u.email,
            role: u.role.as_str().to_string(),
            is_active: u.is_active,
            force_password_change: u.force_password_change,
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
