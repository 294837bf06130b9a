//! Error handler for the users API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use mongodb::error::Error as MongoError;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("validation error occurred")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error("invalid user ID")]
    InvalidUserId,

    #[error("user not found")]
    NotFound,

    /// Storage failure, re-wrapped so callers never see driver shapes.
    #[error("database request failed: {0}")]
    Database(#[from] MongoError),

    #[error("internal server error, {0}")]
    Internal(String),
}

/// JSON error envelope: `{message, error?}`.
#[derive(Debug, Serialize)]
pub struct ResponseError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ResponseError {
    /// Create an envelope carrying only a `message`.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            error: None,
        }
    }

    /// Add detailed error.
    pub fn error(mut self, description: String) -> Self {
        self.error = Some(description);
        self
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ResponseError::new("Validation error")
                    .error(validation_details(errors)),
            ),

            ServerError::Json(rejection) => (
                StatusCode::BAD_REQUEST,
                ResponseError::new("Invalid body").error(rejection.body_text()),
            ),

            ServerError::InvalidUserId => (
                StatusCode::BAD_REQUEST,
                ResponseError::new("Invalid user ID"),
            ),

            ServerError::NotFound => {
                (StatusCode::NOT_FOUND, ResponseError::new("User not found"))
            },

            ServerError::Database(err) => {
                tracing::error!(%err, "database request failed");

                // Display string only. The structured driver error never
                // reaches the wire.
                (
                    StatusCode::BAD_REQUEST,
                    ResponseError::new("Server error").error(err.to_string()),
                )
            },

            ServerError::Internal(details) => {
                tracing::error!(%details, "internal server error");

                (
                    StatusCode::BAD_REQUEST,
                    ResponseError::new("Server error").error(details.clone()),
                )
            },
        };

        (status, Json(body)).into_response()
    }
}

fn validation_details(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, issues)| {
            issues.iter().map(move |issue| {
                let message = issue
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| issue.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
