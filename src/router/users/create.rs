//! Create a new user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::router::Valid;
use crate::user::{NewUser, User};
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<NewUser>,
) -> Result<(StatusCode, Json<User>), ServerError> {
    let user = state.users().create_user(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::user::User;
    use crate::*;

    #[tokio::test]
    async fn test_create_handler() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/users",
            json!({ "name": "A", "email": "a@b.com", "age": 30 }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let user: User = serde_json::from_slice(&body).unwrap();
        assert_eq!(user.id.len(), 24);
        assert!(user.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.age, 30);
    }

    #[tokio::test]
    async fn test_create_handler_rejects_missing_fields() {
        let app = app(router::state());

        // Missing email and age.
        let response = make_request(
            app,
            Method::POST,
            "/users",
            json!({ "name": "A" }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body.get("message").is_some());
    }

    #[tokio::test]
    async fn test_create_handler_rejects_empty_name() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/users",
            json!({ "name": "", "email": "a@b.com", "age": 30 }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Validation error");
    }
}
