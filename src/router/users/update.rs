//! Partial-field update of a user.

use axum::Json;
use axum::extract::State;

use crate::router::{Confirmation, UserId, Valid};
use crate::user::UserPatch;
use crate::{AppState, ServerError};

pub async fn handler(
    State(state): State<AppState>,
    UserId(id): UserId,
    Valid(body): Valid<UserPatch>,
) -> Result<Json<Confirmation>, ServerError> {
    if state.users().update_user(&id, &body).await? {
        Ok(Json(Confirmation::new("User updated")))
    } else {
        Err(ServerError::NotFound)
    }
}
