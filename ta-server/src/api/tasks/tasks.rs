//! Task REST API handlers.

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::tasks::create_task_request::CreateTaskRequest;
use crate::api::tasks::task_dto::TaskDto;
use crate::api::tasks::task_list_response::TaskListResponse;
use crate::api::tasks::task_response::TaskResponse;
use crate::api::tasks::update_task_request::UpdateTaskRequest;
use crate::state::AppState;

use ta_auth::Claims;
use ta_core::Task;
use ta_db::TaskRepository;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GET /api/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<TaskListResponse>> {
    let repo = TaskRepository::new(state.pool.clone());
    let tasks = repo.find_all(claims.tenant_id).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo
        .find_by_id(claims.tenant_id, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Response> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("Title must not be empty", Some("title")));
    }

    let now = Utc::now();
    let task = Task {
        id: Uuid::new_v4(),
        tenant_id: claims.tenant_id,
        title: request.title,
        description: request.description,
        assigned_to: request
            .assigned_to
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()?,
        priority: request.priority.unwrap_or_else(|| "Normal".to_string()),
        status: "Pending".to_string(),
        due_date: request
            .due_date
            .map(|s| parse_timestamp(s, "dueDate"))
            .transpose()?,
        created_at: now,
        updated_at: now,
    };

    let repo = TaskRepository::new(state.pool.clone());
    repo.create(&task).await?;

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse { task: task.into() }),
    )
        .into_response())
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let mut task = repo
        .find_by_id(claims.tenant_id, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", id)))?;

    if let Some(title) = request.title {
        task.title = title;
    }
    if let Some(description) = request.description {
        task.description = Some(description);
    }
    if let Some(assigned_to) = request.assigned_to {
        task.assigned_to = Some(Uuid::parse_str(&assigned_to)?);
    }
    if let Some(priority) = request.priority {
        task.priority = priority;
    }
    if let Some(status) = request.status {
        task.status = status;
    }
    if let Some(due_date) = request.due_date {
        task.due_date = Some(parse_timestamp(due_date, "dueDate")?);
    }

    task.updated_at = Utc::now();
    repo.update(&task).await?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let affected = repo.delete(claims.tenant_id, task_id).await?;

    if affected == 0 {
        return Err(ApiError::not_found(format!("Task {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

fn parse_timestamp(secs: i64, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("Invalid timestamp: {}", secs), Some(field)))
}
