use ta_core::Task;

use serde::Serialize;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: String,
    pub status: String,
    pub due_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title,
            description: t.description,
            assigned_to: t.assigned_to.map(|id| id.to_string()),
            priority: t.priority,
            status: t.status,
            due_date: t.due_date.map(|dt| dt.timestamp()),
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
