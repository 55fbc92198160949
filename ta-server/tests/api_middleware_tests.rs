//! Integration tests for the authentication and role middleware
mod common;

use crate::common::{
    TEST_SECRET, access_token_for, create_test_app_state, create_test_tenant, create_test_user,
    refresh_token_for,
};

use ta_auth::JwtIssuer;
use ta_core::Role;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ta_server::build_router;

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn error_code(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["error"]["code"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_protected_route_without_header_unauthorized() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/leads")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await, "MISSING_CREDENTIAL");
}

#[tokio::test]
async fn test_protected_route_with_basic_scheme_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/leads")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await, "MALFORMED_CREDENTIAL");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = get_with_token("/api/leads", "not.a.jwt");

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await, "MALFORMED_CREDENTIAL");
}

#[tokio::test]
async fn test_protected_route_with_foreign_signature_rejected() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let user = create_test_user(&state.pool, tenant_id, "asha@example.com", Role::User).await;

    let foreign_issuer = JwtIssuer::new(b"some-other-secret", 900, 604800);
    let token = foreign_issuer
        .issue_access(user.id, user.tenant_id, user.role)
        .unwrap();

    let app = build_router(state.clone());
    let response = app.oneshot(get_with_token("/api/leads", &token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await, "BAD_SIGNATURE");
}

#[tokio::test]
async fn test_protected_route_with_expired_token_rejected() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let user = create_test_user(&state.pool, tenant_id, "asha@example.com", Role::User).await;

    let expired_issuer = JwtIssuer::new(TEST_SECRET, -120, -120);
    let token = expired_issuer
        .issue_access(user.id, user.tenant_id, user.role)
        .unwrap();

    let app = build_router(state.clone());
    let response = app.oneshot(get_with_token("/api/leads", &token)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await, "EXPIRED_CREDENTIAL");
}

#[tokio::test]
async fn test_protected_route_rejects_refresh_token() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let user = create_test_user(&state.pool, tenant_id, "asha@example.com", Role::User).await;
    let refresh_token = refresh_token_for(&state, &user);

    let app = build_router(state.clone());
    let response = app
        .oneshot(get_with_token("/api/leads", &refresh_token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(response).await, "WRONG_CREDENTIAL_KIND");
}

#[tokio::test]
async fn test_admin_route_forbidden_for_agent() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let agent = create_test_user(&state.pool, tenant_id, "agent@example.com", Role::Agent).await;
    let token = access_token_for(&state, &agent);

    let app = build_router(state.clone());
    let response = app
        .oneshot(get_with_token("/api/admin/agents", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(error_code(response).await, "INSUFFICIENT_ROLE");
}

#[tokio::test]
async fn test_admin_route_allowed_for_admin() {
    let state = create_test_app_state().await;
    let tenant_id = create_test_tenant(&state.pool).await;
    let admin = create_test_user(&state.pool, tenant_id, "admin@example.com", Role::Admin).await;
    let token = access_token_for(&state, &admin);

    let app = build_router(state.clone());
    let response = app
        .oneshot(get_with_token("/api/admin/agents", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint_is_public() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
