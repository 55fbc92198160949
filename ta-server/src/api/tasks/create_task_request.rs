use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// User id of the agent to assign
    #[serde(default)]
    pub assigned_to: Option<String>,

    /// Low, Normal, High; defaults to Normal
    #[serde(default)]
    pub priority: Option<String>,

    /// Unix seconds
    #[serde(default)]
    pub due_date: Option<i64>,
}
