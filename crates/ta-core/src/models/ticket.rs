use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub customer_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    /// Open, InProgress, Closed
    pub status: String,
    /// Low, Normal, High
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
