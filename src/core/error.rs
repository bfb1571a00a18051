// Centralized error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body every error response is serialized through
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced to clients by the gates and handlers.
///
/// Every error is terminal for its request: it becomes the HTTP response
/// directly, with no retry or recovery path.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("user does not exist")]
    UserNotFound,

    #[error("todo does not exist")]
    TodoNotFound,

    /// The delete handler re-checks the collection; this covers a todo that
    /// vanished between the gate and the removal
    #[error("todo not found")]
    TodoGone,

    #[error("id is not a valid uuid")]
    MalformedTodoId,

    #[error("username already exists")]
    UsernameTaken,

    #[error("pro plan is already activated")]
    AlreadyPro,

    #[error("you must be on the pro plan to create more than {limit} todos")]
    QuotaExceeded { limit: usize },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound | ApiError::TodoNotFound | ApiError::TodoGone => {
                StatusCode::NOT_FOUND
            }
            ApiError::MalformedTodoId
            | ApiError::UsernameTaken
            | ApiError::AlreadyPro
            | ApiError::MissingField(_)
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::QuotaExceeded { .. } => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
