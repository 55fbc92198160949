use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub customer_name: String,
    pub contact_info: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub destination: Option<String>,

    #[serde(default)]
    pub budget: Option<f64>,

    /// Unix seconds
    #[serde(default)]
    pub travel_date: Option<i64>,

    #[serde(default)]
    pub details: Option<String>,
}
