//! Full CRUD lifecycle over the HTTP surface.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::Request;
use axum::http::{Method, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use users_api::config::Configuration;
use users_api::database::Database;
use users_api::user::User;
use users_api::{AppState, app};

fn test_app() -> Router {
    app(AppState {
        config: Arc::new(Configuration::default()),
        db: Database::in_memory(),
    })
}

async fn request(
    app: &Router,
    method: Method,
    path: &str,
    body: String,
) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_user_routes_crud_operations() {
    let app = test_app();

    // Create user.
    let (status, body) = request(
        &app,
        Method::POST,
        "/users",
        json!({ "name": "Mohammad Kiani", "email": "test@example.com", "age": 22 })
            .to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let created: User = serde_json::from_value(body).unwrap();
    assert_eq!(created.id.len(), 24);
    let user_path = format!("/users/{}", created.id);

    // Get all users.
    let (status, body) =
        request(&app, Method::GET, "/users", String::default()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    // Get user by ID.
    let (status, body) =
        request(&app, Method::GET, &user_path, String::default()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mohammad Kiani");
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["age"], 22);

    // Update user.
    let (status, body) = request(
        &app,
        Method::PUT,
        &user_path,
        json!({ "name": "Mahmood Kiani", "email": "test2@example.com" })
            .to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated");

    // Verify update; age stays untouched.
    let (_, body) =
        request(&app, Method::GET, &user_path, String::default()).await;
    assert_eq!(body["name"], "Mahmood Kiani");
    assert_eq!(body["email"], "test2@example.com");
    assert_eq!(body["age"], 22);

    // Delete user.
    let (status, body) =
        request(&app, Method::DELETE, &user_path, String::default()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    // Verify deletion.
    let (status, body) =
        request(&app, Method::GET, &user_path, String::default()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_create_rejects_incomplete_body() {
    let app = test_app();

    let (status, body) = request(
        &app,
        Method::POST,
        "/users",
        json!({ "name": "A" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_id_routes_reject_malformed_identifier_before_storage() {
    let app = test_app();

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let body = if method == Method::PUT {
            json!({ "name": "B" }).to_string()
        } else {
            String::default()
        };

        let (status, body) =
            request(&app, method, "/users/abc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid user ID");
    }
}
