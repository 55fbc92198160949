//! Integration tests for lead API handlers, including tenant isolation
mod common;

use crate::common::{access_token_for, create_test_app_state, create_test_tenant, create_test_user};

use ta_core::Role;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use ta_server::build_router;

fn request_with_token(
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json");

    match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_leads_empty() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());
    let response = app
        .oneshot(request_with_token("GET", "/api/leads", &token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["leads"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_lead_defaults() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());
    let response = app
        .oneshot(request_with_token(
            "POST",
            "/api/leads",
            &token,
            Some(json!({
                "customerName": "Priya Patel",
                "contactInfo": "priya@example.com",
                "destination": "Lisbon",
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["lead"]["customerName"], "Priya Patel");
    assert_eq!(json["lead"]["status"], "New");
    assert_eq!(json["lead"]["budget"], 0.0);
    assert!(json["lead"]["assignedTo"].is_null());
}

#[tokio::test]
async fn test_create_lead_empty_name_rejected() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());
    let response = app
        .oneshot(request_with_token(
            "POST",
            "/api/leads",
            &token,
            Some(json!({"customerName": "  ", "contactInfo": "x@example.com"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_lead_roundtrip() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());

    let created = app
        .clone()
        .oneshot(request_with_token(
            "POST",
            "/api/leads",
            &token,
            Some(json!({
                "customerName": "Priya Patel",
                "contactInfo": "priya@example.com",
                "budget": 4200.0,
            })),
        ))
        .await
        .unwrap();
    let lead_id = json_body(created).await["lead"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(request_with_token(
            "GET",
            &format!("/api/leads/{}", lead_id),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["lead"]["id"], lead_id);
    assert_eq!(json["lead"]["budget"], 4200.0);
}

#[tokio::test]
async fn test_get_lead_not_found() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());
    let response = app
        .oneshot(request_with_token(
            "GET",
            &format!("/api/leads/{}", Uuid::new_v4()),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_lead_partial_fields() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());

    let created = app
        .clone()
        .oneshot(request_with_token(
            "POST",
            "/api/leads",
            &token,
            Some(json!({
                "customerName": "Priya Patel",
                "contactInfo": "priya@example.com",
                "destination": "Lisbon",
            })),
        ))
        .await
        .unwrap();
    let lead_id = json_body(created).await["lead"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(request_with_token(
            "PUT",
            &format!("/api/leads/{}", lead_id),
            &token,
            Some(json!({"status": "Qualified", "assignedTo": agent.id.to_string()})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["lead"]["status"], "Qualified");
    assert_eq!(json["lead"]["assignedTo"], agent.id.to_string());
    // Untouched fields survive a partial update
    assert_eq!(json["lead"]["destination"], "Lisbon");
}

#[tokio::test]
async fn test_delete_lead_then_gone() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());

    let created = app
        .clone()
        .oneshot(request_with_token(
            "POST",
            "/api/leads",
            &token,
            Some(json!({"customerName": "Priya Patel", "contactInfo": "priya@example.com"})),
        ))
        .await
        .unwrap();
    let lead_id = json_body(created).await["lead"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(request_with_token(
            "DELETE",
            &format!("/api/leads/{}", lead_id),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["deleted"], true);

    let response = app
        .oneshot(request_with_token(
            "GET",
            &format!("/api/leads/{}", lead_id),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lead_invisible_to_other_tenant() {
    let state = create_test_app_state().await;
    let tenant_a = create_test_tenant(&state.pool).await;
    let tenant_b = create_test_tenant(&state.pool).await;
    let agent_a = create_test_user(&state.pool, tenant_a, "a@example.com", Role::Agent).await;
    let agent_b = create_test_user(&state.pool, tenant_b, "b@example.com", Role::Agent).await;
    let token_a = access_token_for(&state, &agent_a);
    let token_b = access_token_for(&state, &agent_b);

    let app = build_router(state.clone());

    let created = app
        .clone()
        .oneshot(request_with_token(
            "POST",
            "/api/leads",
            &token_a,
            Some(json!({"customerName": "Priya Patel", "contactInfo": "priya@example.com"})),
        ))
        .await
        .unwrap();
    let lead_id = json_body(created).await["lead"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Reads, updates and deletes from the other tenant all see nothing
    let response = app
        .clone()
        .oneshot(request_with_token(
            "GET",
            &format!("/api/leads/{}", lead_id),
            &token_b,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(request_with_token(
            "PUT",
            &format!("/api/leads/{}", lead_id),
            &token_b,
            Some(json!({"status": "Qualified"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(request_with_token(
            "DELETE",
            &format!("/api/leads/{}", lead_id),
            &token_b,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request_with_token("GET", "/api/leads", &token_b, None))
        .await
        .unwrap();
    assert_eq!(json_body(response).await["leads"].as_array().unwrap().len(), 0);
}
