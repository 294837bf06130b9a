//! Delete a user.

use axum::Json;
use axum::extract::State;

use crate::router::{Confirmation, UserId};
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<Confirmation>, ServerError> {
    if state.users().delete_user(&id).await? {
        Ok(Json(Confirmation::new("User deleted")))
    } else {
        Err(ServerError::NotFound)
    }
}
