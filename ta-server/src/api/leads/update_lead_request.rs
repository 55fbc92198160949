use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadRequest {
    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub contact_info: Option<String>,

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

    #[serde(default)]
    pub status: Option<String>,

    /// User id of the agent to assign
    #[serde(default)]
    pub assigned_to: Option<String>,
}
