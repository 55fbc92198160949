use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of a notable action inside one tenant.
///
/// Written in the same transaction as the change it describes, so the
/// row and its audit trail commit or roll back together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// The user performing the action
    pub user_id: Uuid,
    pub action: String,
    /// Entity kind acted upon, e.g. "Invoice"
    pub entity: String,
    pub entity_id: Option<Uuid>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}
