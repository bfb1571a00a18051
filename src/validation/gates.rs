// Request gates: each one either resolves entities for the handler or
// short-circuits the request with a terminal error.

use crate::core::error::ApiError;
use crate::models::todo::Todo;
use crate::models::user::User;
use crate::stores::user_store::UserStore;
use crate::validation::ids::is_canonical_v4;
use axum::http::HeaderMap;
use uuid::Uuid;

/// Extract the `username` header as a string
pub fn username_header(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get("username")
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::MissingField("username header"))
}

/// Resolve the account named by the `username` header
pub fn resolve_account(store: &UserStore, headers: &HeaderMap) -> Result<User, ApiError> {
    let username = username_header(headers)?;

    store
        .find_by_username(username)
        .ok_or(ApiError::UserNotFound)
}

/// Pure quota predicate: a user may create another todo while under the
/// free limit, or without bound on the pro plan
pub fn ensure_todo_quota(user: &User, limit: usize) -> Result<(), ApiError> {
    if user.todos.len() < limit || user.pro {
        Ok(())
    } else {
        Err(ApiError::QuotaExceeded { limit })
    }
}

/// Resolve a todo owned by the account in the `username` header.
///
/// Check order is part of the contract: user existence, then id format,
/// then todo existence, each short-circuiting on failure.
pub fn resolve_owned_todo(
    store: &UserStore,
    headers: &HeaderMap,
    raw_id: &str,
) -> Result<(User, Todo), ApiError> {
    let username = username_header(headers)?;

    let user = store
        .find_by_username(username)
        .ok_or(ApiError::UserNotFound)?;

    if !is_canonical_v4(raw_id) {
        return Err(ApiError::MalformedTodoId);
    }
    let todo_id = Uuid::parse_str(raw_id).map_err(|_| ApiError::MalformedTodoId)?;

    let todo = user
        .find_todo(todo_id)
        .cloned()
        .ok_or(ApiError::TodoNotFound)?;

    Ok((user, todo))
}

/// Resolve a user by the path id.
///
/// Deliberately performs no format validation: an unparsable id is just a
/// failed lookup (404), unlike the todo gate's 400. The asymmetry matches
/// the existing consumers of this API.
pub fn resolve_user_by_id(store: &UserStore, raw_id: &str) -> Result<User, ApiError> {
    let id = Uuid::parse_str(raw_id).map_err(|_| ApiError::UserNotFound)?;

    store.find_by_id(id).ok_or(ApiError::UserNotFound)
}
