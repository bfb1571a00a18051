// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Users
        .route("/users", post(crate::handlers::users::create_user_handler))
        .route("/users/{id}", get(crate::handlers::users::get_user_handler))
        .route(
            "/users/{id}/pro",
            patch(crate::handlers::users::upgrade_user_handler),
        )
        // Todos, scoped by the `username` header
        .route(
            "/todos",
            get(crate::handlers::todos::list_todos_handler)
                .post(crate::handlers::todos::create_todo_handler),
        )
        .route(
            "/todos/{id}",
            put(crate::handlers::todos::update_todo_handler)
                .delete(crate::handlers::todos::delete_todo_handler),
        )
        .route(
            "/todos/{id}/done",
            patch(crate::handlers::todos::complete_todo_handler),
        )
        // Ops
        .route("/health", get(crate::handlers::health::health_handler))
        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)
        .with_state(state)
}
