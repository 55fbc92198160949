use ta_core::Invoice;

use serde::Serialize;

/// Invoice DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: String,
    pub invoice_type: String,
    pub issue_date: i64,
    pub due_date: i64,
    pub status: String,
    pub amount: f64,
    pub currency: String,
    pub customer_id: Option<String>,
    pub vendor_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Invoice> for InvoiceDto {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id.to_string(),
            invoice_type: i.invoice_type,
            issue_date: i.issue_date.timestamp(),
            due_date: i.due_date.timestamp(),
            status: i.status,
            amount: i.amount,
            currency: i.currency,
            customer_id: i.customer_id.map(|id| id.to_string()),
            vendor_id: i.vendor_id.map(|id| id.to_string()),
            created_at: i.created_at.timestamp(),
            updated_at: i.updated_at.timestamp(),
        }
    }
}
