use ta_core::Ticket;

use serde::Serialize;

/// Ticket DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub id: String,
    pub subject: String,
    pub description: Option<String>,
    pub customer_id: Option<String>,
    pub assigned_to: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Ticket> for TicketDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id.to_string(),
            subject: t.subject,
            description: t.description,
            customer_id: t.customer_id.map(|id| id.to_string()),
            assigned_to: t.assigned_to.map(|id| id.to_string()),
            status: t.status,
            priority: t.priority,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
