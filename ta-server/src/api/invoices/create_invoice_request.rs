use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// "sale" or "purchase"
    pub invoice_type: String,

    /// Unix seconds; defaults to now
    #[serde(default)]
    pub issue_date: Option<i64>,

    /// Unix seconds
    pub due_date: i64,

    pub amount: f64,

    /// ISO 4217 code; defaults to USD
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub vendor_id: Option<String>,
}
