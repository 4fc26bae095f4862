//! Handler tests for the Users domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the users domain handlers against
//! the in-memory repository, not the full application with routing.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_users::*;
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

use remote::{OrderGateway, RemoteResult};

mock! {
    pub Orders {}

    #[async_trait]
    impl OrderGateway for Orders {
        async fn get_user_orders(&self, user_id: Uuid) -> RemoteResult<Value>;
        async fn get_order(&self, order_id: &str) -> RemoteResult<Value>;
        async fn create_order(&self, payload: Value) -> RemoteResult<Value>;
        async fn delete_order(&self, order_id: &str) -> RemoteResult<Value>;
        async fn delete_user_orders(&self, user_id: Uuid) -> RemoteResult<Value>;
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_jwt() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new(
        "test-secret-that-is-at-least-32-chars-long",
    ))
}

fn auth_app() -> axum::Router {
    let service = UserService::new(InMemoryUserRepository::new(), Arc::new(MockOrders::new()));
    auth_handlers::router(service, test_jwt())
}

fn register_body(email: &str) -> String {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "password": "secret1"
    })
    .to_string()
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_201_with_token_and_no_password() {
    let app = auth_app();

    let response = app
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_returns_400() {
    let app = auth_app();

    let first = app
        .clone()
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(second.into_body()).await;
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_invalid_email_returns_400() {
    let app = auth_app();

    let response = app
        .oneshot(post_json("/register", register_body("not-an-email")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_200_with_token() {
    let app = auth_app();

    app.clone()
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/login",
            json!({"email": "ada@example.com", "password": "secret1"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_failures_share_one_error_message() {
    let app = auth_app();

    app.clone()
        .oneshot(post_json("/register", register_body("ada@example.com")))
        .await
        .unwrap();

    let unknown_email = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({"email": "nobody@example.com", "password": "secret1"}).to_string(),
        ))
        .await
        .unwrap();
    let wrong_password = app
        .oneshot(post_json(
            "/login",
            json!({"email": "ada@example.com", "password": "wrong"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_body: Value = json_body(unknown_email.into_body()).await;
    let wrong_body: Value = json_body(wrong_password.into_body()).await;
    assert_eq!(unknown_body["message"], wrong_body["message"]);
    assert_eq!(unknown_body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_get_user_returns_200() {
    let service = UserService::new(InMemoryUserRepository::new(), Arc::new(MockOrders::new()));
    let created = service
        .register(RegisterRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            address: None,
            phone_number: None,
            avatar_url: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: UserResponse = json_body(response.into_body()).await;
    assert_eq!(body.id, created.id);
}

#[tokio::test]
async fn test_get_user_invalid_uuid_returns_400() {
    let service = UserService::new(InMemoryUserRepository::new(), Arc::new(MockOrders::new()));
    let app = handlers::router(service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let service = UserService::new(InMemoryUserRepository::new(), Arc::new(MockOrders::new()));
    let app = handlers::router(service);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", Uuid::now_v7()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_204_and_cascades_orders() {
    let repository = InMemoryUserRepository::new();
    let setup = UserService::new(repository.clone(), Arc::new(MockOrders::new()));
    let created = setup
        .register(RegisterRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            address: None,
            phone_number: None,
            avatar_url: None,
        })
        .await
        .unwrap();

    let mut orders = MockOrders::new();
    orders
        .expect_delete_user_orders()
        .times(1)
        .returning(|_| Ok(Value::Null));

    let app = handlers::router(UserService::new(repository, Arc::new(orders)));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
