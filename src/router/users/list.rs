//! List users, optionally narrowed by query filters.

use axum::Json;
use axum::extract::{Query, State};

use crate::user::{User, UserFilter};
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Vec<User>>, ServerError> {
    let users = state.users().get_all_users(&filter).await?;
    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::user::User;
    use crate::*;

    async fn seed(app: &axum::Router, name: &str, email: &str, age: u32) {
        let response = make_request(
            app.clone(),
            Method::POST,
            "/users",
            json!({ "name": name, "email": email, "age": age }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    async fn list(app: &axum::Router, path: &str) -> Vec<User> {
        let response =
            make_request(app.clone(), Method::GET, path, String::default())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_handler_empty() {
        let app = app(router::state());

        assert!(list(&app, "/users").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_handler_returns_all() {
        let app = app(router::state());
        seed(&app, "Mohammad Kiani", "m@example.com", 22).await;
        seed(&app, "Someone Else", "s@example.com", 30).await;

        let users = list(&app, "/users").await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Mohammad Kiani");
        assert_eq!(users[1].name, "Someone Else");
    }

    #[tokio::test]
    async fn test_list_handler_filters_by_name_substring() {
        let app = app(router::state());
        seed(&app, "Mohammad Kiani", "m@example.com", 22).await;
        seed(&app, "Someone Else", "s@example.com", 30).await;

        let users = list(&app, "/users?name=moh").await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Mohammad Kiani");
    }

    #[tokio::test]
    async fn test_list_handler_filters_by_age_equality() {
        let app = app(router::state());
        seed(&app, "A", "a@example.com", 22).await;
        seed(&app, "B", "b@example.com", 30).await;

        let users = list(&app, "/users?age=30").await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "B");

        assert!(list(&app, "/users?age=99").await.is_empty());
    }
}
