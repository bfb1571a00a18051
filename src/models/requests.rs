use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body for POST /users
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
}

/// Body for POST /todos and PUT /todos/{id}
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub title: String,

    /// RFC 3339 timestamp or a bare `YYYY-MM-DD` date
    #[serde(deserialize_with = "crate::models::todo::deserialize_deadline")]
    pub deadline: DateTime<Utc>,
}
