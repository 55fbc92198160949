use ta_core::Payment;

use serde::Serialize;

/// Payment DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: String,
    pub invoice_id: String,
    pub payment_date: i64,
    pub amount: f64,
    pub method: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id.to_string(),
            invoice_id: p.invoice_id.to_string(),
            payment_date: p.payment_date.timestamp(),
            amount: p.amount,
            method: p.method,
            status: p.status,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
