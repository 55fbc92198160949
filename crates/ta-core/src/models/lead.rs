use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sales lead: a prospective customer enquiry for a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub customer_name: String,
    pub contact_info: String,
    pub phone: Option<String>,
    pub destination: Option<String>,
    pub budget: f64,
    pub travel_date: Option<DateTime<Utc>>,
    pub details: Option<String>,
    pub status: String,
    /// User id of the agent the lead is assigned to
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
