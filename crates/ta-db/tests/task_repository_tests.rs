mod common;

use common::{create_test_pool, create_test_task, create_test_tenant};

use ta_db::TaskRepository;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_task_when_created_then_can_be_found_by_id() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let task = create_test_task(tenant_id);
    let repo = TaskRepository::new(pool.clone());

    repo.create(&task).await.unwrap();

    let found = repo.find_by_id(tenant_id, task.id).await.unwrap().unwrap();

    assert_that!(found.id, eq(task.id));
    assert_that!(found.title, eq(&task.title));
    assert_that!(found.priority, eq("Normal"));
    assert_that!(found.status, eq("Pending"));
}

#[tokio::test]
async fn given_existing_task_when_updated_then_changes_are_persisted() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let repo = TaskRepository::new(pool.clone());
    let mut task = create_test_task(tenant_id);
    repo.create(&task).await.unwrap();

    let agent_id = Uuid::new_v4();
    task.status = "In Progress".to_string();
    task.assigned_to = Some(agent_id);
    task.updated_at = Utc::now();

    let affected = repo.update(&task).await.unwrap();
    assert_that!(affected, eq(1));

    let found = repo.find_by_id(tenant_id, task.id).await.unwrap().unwrap();
    assert_that!(found.status, eq("In Progress"));
    assert_that!(found.assigned_to, some(eq(agent_id)));
}

#[tokio::test]
async fn given_existing_task_when_deleted_then_no_longer_listed() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let repo = TaskRepository::new(pool.clone());
    let task = create_test_task(tenant_id);
    repo.create(&task).await.unwrap();

    let affected = repo.delete(tenant_id, task.id).await.unwrap();
    assert_that!(affected, eq(1));

    let tasks = repo.find_all(tenant_id).await.unwrap();
    assert_that!(tasks.len(), eq(0));
}
