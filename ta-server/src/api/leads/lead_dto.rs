use ta_core::Lead;

use serde::Serialize;

/// Lead DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    pub id: String,
    pub customer_name: String,
    pub contact_info: String,
    pub phone: Option<String>,
    pub destination: Option<String>,
    pub budget: f64,
    pub travel_date: Option<i64>,
    pub details: Option<String>,
    pub status: String,
    pub assigned_to: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Lead> for LeadDto {
    fn from(l: Lead) -> Self {
        Self {
            id: l.id.to_string(),
            customer_name: l.customer_name,
            contact_info: l.contact_info,
            phone: l.phone,
            destination: l.destination,
            budget: l.budget,
            travel_date: l.travel_date.map(|dt| dt.timestamp()),
            details: l.details,
            status: l.status,
            assigned_to: l.assigned_to.map(|id| id.to_string()),
            created_at: l.created_at.timestamp(),
            updated_at: l.updated_at.timestamp(),
        }
    }
}
