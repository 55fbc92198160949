use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub invoice_id: String,

    /// Unix seconds; defaults to now
    #[serde(default)]
    pub payment_date: Option<i64>,

    pub amount: f64,

    /// "Credit Card", "Bank Transfer" and the like
    #[serde(default)]
    pub method: Option<String>,

    /// Defaults to "Pending"
    #[serde(default)]
    pub status: Option<String>,
}
