use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    #[serde(default)]
    pub invoice_id: Option<String>,

    /// Unix seconds
    #[serde(default)]
    pub payment_date: Option<i64>,

    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}
