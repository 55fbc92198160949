use crate::api::tasks::task_dto::TaskDto;

use serde::Serialize;

/// List of tasks response
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDto>,
}
