//! Get a user by identifier.

use axum::Json;
use axum::extract::State;

use crate::router::UserId;
use crate::user::User;
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ServerError> {
    match state.users().get_user_by_id(&id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ServerError::NotFound),
    }
}
