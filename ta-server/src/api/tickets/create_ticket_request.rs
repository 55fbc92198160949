use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub subject: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub customer_id: Option<String>,

    /// User id of the agent to assign
    #[serde(default)]
    pub assigned_to: Option<String>,

    /// Low, Normal, High; defaults to Normal
    #[serde(default)]
    pub priority: Option<String>,
}
