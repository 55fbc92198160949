use crate::Result;
use crate::row::{get_timestamp, get_timestamp_opt, get_uuid, get_uuid_opt};

use ta_core::Task;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, tenant_id, title, description, assigned_to, priority,
                    status, due_date, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.tenant_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.assigned_to.map(|id| id.to_string()))
        .bind(&task.priority)
        .bind(&task.status)
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> Result<Option<Task>> {
        let row = sqlx::query(
            r#"
                SELECT id, tenant_id, title, description, assigned_to, priority,
                    status, due_date, created_at, updated_at
                FROM tasks
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_task(&r)).transpose()
    }

    pub async fn find_all(&self, tenant_id: Uuid) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT id, tenant_id, title, description, assigned_to, priority,
                    status, due_date, created_at, updated_at
                FROM tasks
                WHERE tenant_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_task).collect()
    }

    pub async fn update(&self, task: &Task) -> Result<u64> {
        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, assigned_to = ?, priority = ?,
                    status = ?, due_date = ?, updated_at = ?
                WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.assigned_to.map(|id| id.to_string()))
        .bind(&task.priority)
        .bind(&task.status)
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .bind(task.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_task(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: get_uuid(row, "id")?,
        tenant_id: get_uuid(row, "tenant_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        assigned_to: get_uuid_opt(row, "assigned_to")?,
        priority: row.try_get("priority")?,
        status: row.try_get("status")?,
        due_date: get_timestamp_opt(row, "due_date")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}
