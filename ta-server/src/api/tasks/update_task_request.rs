use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Unix seconds
    #[serde(default)]
    pub due_date: Option<i64>,
}
