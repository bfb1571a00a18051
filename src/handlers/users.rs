use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::handlers::extract::ValidJson;
use crate::models::requests::CreateUserRequest;
use crate::models::user::User;
use crate::validation::gates::resolve_user_by_id;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Create a user
///
/// POST /users with body {name, username}
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateUserRequest>,
) -> Result<Response, ApiError> {
    if state.store.find_by_username(&body.username).is_some() {
        return Err(ApiError::UsernameTaken);
    }

    let user = User::new(state.ids.generate(), body.name, body.username);
    state.store.insert(user.clone());

    info!(user_id = %user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// Fetch a user
///
/// GET /users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let user = resolve_user_by_id(&state.store, &id)?;

    Ok(Json(user).into_response())
}

/// Activate the pro plan on a user, a one-way transition
///
/// PATCH /users/{id}/pro
pub async fn upgrade_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let user = resolve_user_by_id(&state.store, &id)?;

    if user.pro {
        return Err(ApiError::AlreadyPro);
    }

    let updated = state.store.set_pro(user.id).ok_or(ApiError::UserNotFound)?;

    info!(user_id = %updated.id, "Pro plan activated");

    Ok(Json(updated).into_response())
}
