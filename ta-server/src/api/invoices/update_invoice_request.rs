use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    #[serde(default)]
    pub invoice_type: Option<String>,

    /// Unix seconds
    #[serde(default)]
    pub issue_date: Option<i64>,

    /// Unix seconds
    #[serde(default)]
    pub due_date: Option<i64>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub vendor_id: Option<String>,
}
