use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::handlers::extract::ValidJson;
use crate::models::requests::TodoPayload;
use crate::models::todo::Todo;
use crate::validation::gates::{ensure_todo_quota, resolve_account, resolve_owned_todo};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// List the account's todos in insertion order
///
/// GET /todos with header `username`
pub async fn list_todos_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let user = resolve_account(&state.store, &headers)?;

    Ok(Json(user.todos).into_response())
}

/// Create a todo, subject to the free-plan quota
///
/// POST /todos with header `username` and body {title, deadline}
pub async fn create_todo_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ValidJson(body): ValidJson<TodoPayload>,
) -> Result<Response, ApiError> {
    let user = resolve_account(&state.store, &headers)?;
    ensure_todo_quota(&user, state.config.quota.free_todos)?;

    let todo = Todo::new(state.ids.generate(), body.title, body.deadline);
    let stored = state
        .store
        .push_todo(user.id, todo)
        .ok_or(ApiError::UserNotFound)?;

    info!(user_id = %user.id, todo_id = %stored.id, "Todo created");

    Ok((StatusCode::CREATED, Json(stored)).into_response())
}

/// Overwrite a todo's title and deadline
///
/// PUT /todos/{id} with header `username` and body {title, deadline}
pub async fn update_todo_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    ValidJson(body): ValidJson<TodoPayload>,
) -> Result<Response, ApiError> {
    let (user, todo) = resolve_owned_todo(&state.store, &headers, &id)?;

    let updated = state
        .store
        .update_todo(user.id, todo.id, body.title, body.deadline)
        .ok_or(ApiError::TodoNotFound)?;

    Ok(Json(updated).into_response())
}

/// Mark a todo done (idempotent)
///
/// PATCH /todos/{id}/done with header `username`
pub async fn complete_todo_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let (user, todo) = resolve_owned_todo(&state.store, &headers, &id)?;

    let updated = state
        .store
        .complete_todo(user.id, todo.id)
        .ok_or(ApiError::TodoNotFound)?;

    info!(user_id = %user.id, todo_id = %updated.id, "Todo completed");

    Ok(Json(updated).into_response())
}

/// Delete a todo from its owner's collection
///
/// DELETE /todos/{id} with header `username`
pub async fn delete_todo_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let account = resolve_account(&state.store, &headers)?;
    let (_, todo) = resolve_owned_todo(&state.store, &headers, &id)?;

    // The gate matched the todo, but re-check at removal time
    state
        .store
        .remove_todo(account.id, todo.id)
        .ok_or(ApiError::TodoGone)?;

    info!(user_id = %account.id, todo_id = %todo.id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
