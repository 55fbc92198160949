use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A billing invoice ("sale" or "purchase") for one tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub invoice_type: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: String,
    pub amount: f64,
    /// ISO 4217 code
    pub currency: String,
    pub customer_id: Option<Uuid>,
    /// Supplier the purchase invoice came from
    pub vendor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
