use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier the agency books through (airline, hotel, tour operator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    /// Airline, Hotel, Tour Operator and the like
    pub vendor_type: Option<String>,
    pub contact_person: Option<String>,
    pub contact_info: Option<String>,
    pub payment_terms: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
