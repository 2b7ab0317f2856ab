//! User account and login tests
//!
//! Database tests are ignored by default.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use inventory_backend::{create_router, services::UserService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}@example.com", prefix, nanos)
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    let form = format!("username={}&password={}", email, password);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/login/access-token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    call(app, request).await
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_signup_login_and_read_me() {
    let app = create_router(common::connected_state().await);
    let email = unique_email("reader");

    let (status, user) = call(
        &app,
        json_request(
            Method::POST,
            "/api/v1/users/signup",
            None,
            json!({ "email": email, "password": "password123", "full_name": "Reader" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["is_superuser"], false);
    assert!(user.get("hashed_password").is_none());

    let (status, token) = login(&app, &email, "password123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token["token_type"], "bearer");
    let token = token["access_token"].as_str().unwrap().to_string();

    let (status, me) = call(&app, get("/api/v1/users/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], email.as_str());

    // Regular users cannot list accounts
    let (status, _) = call(&app, get("/api/v1/users", &token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_wrong_password_is_rejected() {
    let app = create_router(common::connected_state().await);
    let email = unique_email("wrong");

    call(
        &app,
        json_request(
            Method::POST,
            "/api/v1/users/signup",
            None,
            json!({ "email": email, "password": "password123" }),
        ),
    )
    .await;

    let (status, body) = login(&app, &email, "password124").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_duplicate_signup_conflicts() {
    let app = create_router(common::connected_state().await);
    let email = unique_email("twice");
    let body = json!({ "email": email, "password": "password123" });

    let (status, _) = call(
        &app,
        json_request(Method::POST, "/api/v1/users/signup", None, body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        &app,
        json_request(Method::POST, "/api/v1/users/signup", None, body),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_ENTRY");
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_password_change_requires_current_password() {
    let app = create_router(common::connected_state().await);
    let email = unique_email("rotate");

    call(
        &app,
        json_request(
            Method::POST,
            "/api/v1/users/signup",
            None,
            json!({ "email": email, "password": "password123" }),
        ),
    )
    .await;
    let (_, token) = login(&app, &email, "password123").await;
    let token = token["access_token"].as_str().unwrap().to_string();

    let (status, _) = call(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/users/me/password",
            Some(&token),
            json!({ "current_password": "nope-nope", "new_password": "password456" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/users/me/password",
            Some(&token),
            json!({ "current_password": "password123", "new_password": "password456" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = login(&app, &email, "password456").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_superuser_cannot_delete_self() {
    let state = common::connected_state().await;
    let email = unique_email("root");
    UserService::new(state.db.clone())
        .ensure_superuser(&email, "password123")
        .await
        .unwrap();
    let app = create_router(state);

    let (_, token) = login(&app, &email, "password123").await;
    let token = token["access_token"].as_str().unwrap().to_string();

    let (status, me) = call(&app, get("/api/v1/users/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["is_superuser"], true);

    let (status, _) = call(&app, get("/api/v1/users", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/v1/users/{}", me["id"]))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = call(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
