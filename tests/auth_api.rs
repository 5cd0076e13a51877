//! Authentication API integration tests
//!
//! Drives the full router (layers, fallback, handlers, service, store)
//! through `axum-test`.

#[macro_use]
mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use authserver::backend::auth::sessions::{TokenError, TOKEN_TTL_SECS};
use authserver::backend::auth::UserStore;
use common::TestApp;

async fn register(app: &TestApp, name: &str, email: &str, password: &str) -> axum_test::TestResponse {
    app.server
        .post("/api/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await
}

async fn login(app: &TestApp, email: &str, password: &str) -> axum_test::TestResponse {
    app.server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Auth Service is up and running!");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = register(&app, "A", "a@x.com", "p1").await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "User registered successfully" }));
}

#[tokio::test]
async fn test_register_persists_hashed_password() {
    let app = TestApp::new();
    assert!(app.store.is_empty().await);

    register(&app, "A", "a@x.com", "p1").await;

    let user = app.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(user.name, "A");
    assert!(user.password_hash != "p1");
    assert!(bcrypt::verify("p1", &user.password_hash).unwrap());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();

    let first = register(&app, "A", "a@x.com", "p1").await;
    let second = register(&app, "B", "a@x.com", "p2").await;

    assert_eq!(first.status_code(), StatusCode::CREATED);
    assert_eq!(second.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = second.json();
    assert_eq!(body["error"], "Registration failed");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_contains!(body["error"].as_str().unwrap(), "name");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new();

    let response = app.server.post("/api/auth/register").text("not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_success_returns_valid_token() {
    let app = TestApp::new();
    register(&app, "A", "a@x.com", "p1").await;
    let user = app.store.find_by_email("a@x.com").await.unwrap().unwrap();

    let response = login(&app, "a@x.com", "p1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token in body");

    assert_eq!(app.tokens().user_id_from_token(token).unwrap(), user.id);
    let claims = app.tokens().verify(token).unwrap();
    assert!(claims.exp > Utc::now().timestamp());
    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
}

#[tokio::test]
async fn test_issued_token_expires_after_one_hour() {
    let app = TestApp::new();
    register(&app, "A", "a@x.com", "p1").await;

    let body: Value = login(&app, "a@x.com", "p1").await.json();
    let token = body["token"].as_str().unwrap();
    let claims = app.tokens().verify(token).unwrap();

    let issued = chrono::DateTime::from_timestamp(claims.iat, 0).unwrap();
    let just_after = issued + Duration::seconds(TOKEN_TTL_SECS) + Duration::seconds(1);
    assert!(matches!(
        app.tokens().verify_at(token, just_after),
        Err(TokenError::Expired { .. })
    ));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();
    register(&app, "A", "a@x.com", "p1").await;

    let response = login(&app, "nobody@x.com", "p1").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    register(&app, "A", "a@x.com", "p1").await;

    let response = login(&app, "a@x.com", "wrong").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_contains!(body["error"].as_str().unwrap(), "password");
}

#[tokio::test]
async fn test_full_scenario() {
    let app = TestApp::new();

    assert_eq!(register(&app, "A", "a@x.com", "p1").await.status_code(), StatusCode::CREATED);
    assert_eq!(login(&app, "a@x.com", "p1").await.status_code(), StatusCode::OK);
    assert_eq!(login(&app, "a@x.com", "wrong").await.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(login(&app, "nobody@x.com", "p1").await.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = TestApp::new();

    let response = app.server.get("/api/auth/me").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_concurrent_logins() {
    let app = TestApp::new();
    register(&app, "A", "a@x.com", "p1").await;

    let (first, second) = tokio::join!(login(&app, "a@x.com", "p1"), login(&app, "a@x.com", "p1"));

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(second.status_code(), StatusCode::OK);
}
