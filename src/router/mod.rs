//! HTTP surface: stateless request/response mapping.

pub mod users;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::Validate;

use crate::ServerError;

/// Liveness route kept from the original service template.
pub async fn root() -> Json<Value> {
    Json(json!({ "root": true }))
}

/// Confirmation message body, e.g. `{"message": "User deleted"}`.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    message: &'static str,
}

impl Confirmation {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// JSON body deserialized then checked against its declared schema.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Valid(value))
    }
}

/// Path identifier matching `^[0-9a-fA-F]{24}$`.
///
/// Anything else is rejected with 400 before the service is ever called.
pub struct UserId(pub ObjectId);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ServerError::InvalidUserId)?;

        let id = ObjectId::parse_str(&id)
            .map_err(|_| ServerError::InvalidUserId)?;

        Ok(UserId(id))
    }
}

#[cfg(test)]
pub(crate) fn state() -> crate::AppState {
    use std::sync::Arc;

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        db: crate::database::Database::in_memory(),
    }
}
