mod common;

use common::{create_test_pool, create_test_tenant, create_test_user};

use ta_core::Role;
use ta_db::UserRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_user_when_created_then_can_be_found_by_id() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let user = create_test_user(tenant_id, "agent@example.com", Role::Agent);
    let repo = UserRepository::new(pool.clone());

    repo.create(&user).await.unwrap();

    let result = repo.find_by_id(tenant_id, user.id).await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.email, eq(&user.email));
    assert_that!(found.role, eq(Role::Agent));
    assert_that!(found.is_active, eq(true));
    assert_that!(found.force_password_change, eq(false));
}

#[tokio::test]
async fn given_duplicate_email_in_same_tenant_when_created_then_insert_fails() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let repo = UserRepository::new(pool.clone());
    let first = create_test_user(tenant_id, "dup@example.com", Role::User);
    let second = create_test_user(tenant_id, "dup@example.com", Role::User);

    repo.create(&first).await.unwrap();
    let result = repo.create(&second).await;

    assert_that!(result.is_err(), eq(true));
}

#[tokio::test]
async fn given_same_email_in_different_tenants_when_created_then_both_succeed() {
    let pool = create_test_pool().await;
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();
    create_test_tenant(&pool, tenant_a).await;
    create_test_tenant(&pool, tenant_b).await;

    let repo = UserRepository::new(pool.clone());
    repo.create(&create_test_user(tenant_a, "shared@example.com", Role::User))
        .await
        .unwrap();
    repo.create(&create_test_user(tenant_b, "shared@example.com", Role::User))
        .await
        .unwrap();

    let in_a = repo
        .find_by_email_and_tenant("shared@example.com", tenant_a)
        .await
        .unwrap();
    let in_b = repo
        .find_by_email_and_tenant("shared@example.com", tenant_b)
        .await
        .unwrap();

    assert_that!(in_a, some(anything()));
    assert_that!(in_b, some(anything()));
    assert_that!(in_a.unwrap().tenant_id, eq(tenant_a));
    assert_that!(in_b.unwrap().tenant_id, eq(tenant_b));
}

#[tokio::test]
async fn given_email_in_two_tenants_when_looked_up_by_email_then_oldest_account_wins() {
    let pool = create_test_pool().await;
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();
    create_test_tenant(&pool, tenant_a).await;
    create_test_tenant(&pool, tenant_b).await;

    let repo = UserRepository::new(pool.clone());

    let mut older = create_test_user(tenant_a, "both@example.com", Role::User);
    older.created_at = Utc::now() - Duration::hours(1);
    let newer = create_test_user(tenant_b, "both@example.com", Role::User);

    repo.create(&older).await.unwrap();
    repo.create(&newer).await.unwrap();

    let found = repo.find_by_email("both@example.com").await.unwrap().unwrap();

    assert_that!(found.id, eq(older.id));
    assert_that!(found.tenant_id, eq(tenant_a));
}

#[tokio::test]
async fn given_existing_user_when_updated_then_changes_are_persisted() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let repo = UserRepository::new(pool.clone());
    let mut user = create_test_user(tenant_id, "update@example.com", Role::Agent);
    repo.create(&user).await.unwrap();

    user.name = "Renamed Agent".to_string();
    user.force_password_change = true;
    user.updated_at = Utc::now();

    let affected = repo.update(&user).await.unwrap();
    assert_that!(affected, eq(1));

    let found = repo.find_by_id(tenant_id, user.id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Renamed Agent"));
    assert_that!(found.force_password_change, eq(true));
}

#[tokio::test]
async fn given_existing_user_when_deleted_then_no_longer_found() {
    let pool = create_test_pool().await;
    let tenant_id = Uuid::new_v4();
    create_test_tenant(&pool, tenant_id).await;

    let repo = UserRepository::new(pool.clone());
    let user = create_test_user(tenant_id, "gone@example.com", Role::Agent);
    repo.create(&user).await.unwrap();

    let affected = repo.delete(tenant_id, user.id).await.unwrap();
    assert_that!(affected, eq(1));

    let result = repo.find_by_id(tenant_id, user.id).await.unwrap();
    assert_that!(result, none());
}

#[tokio::test]
async fn given_users_in_tenant_when_listed_then_only_that_tenant_is_returned() {
    let pool = create_test_pool().await;
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();
    create_test_tenant(&pool, tenant_a).await;
    create_test_tenant(&pool, tenant_b).await;

    let repo = UserRepository::new(pool.clone());
    repo.create(&create_test_user(tenant_a, "a1@example.com", Role::User))
        .await
        .unwrap();
    repo.create(&create_test_user(tenant_a, "a2@example.com", Role::Agent))
        .await
        .unwrap();
    repo.create(&create_test_user(tenant_b, "b1@example.com", Role::User))
        .await
        .unwrap();

    let users = repo.find_all(tenant_a).await.unwrap();

    assert_that!(users.len(), eq(2));
    assert_that!(users.iter().all(|u| u.tenant_id == tenant_a), eq(true));
}
