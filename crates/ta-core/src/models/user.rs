use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account (admin, agent or regular user) inside one tenant.
///
/// `(email, tenant_id)` is unique. The password hash is bcrypt and never
/// leaves the server; DTO types in the API layer control the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub force_password_change: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a freshly generated id.
    pub fn new(tenant_id: Uuid, name: String, email: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name,
            email,
            password_hash,
            role,
            is_active: true,
            force_password_change: false,
            created_at: now,
            updated_at: now,
        }
    }
}
