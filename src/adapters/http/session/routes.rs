//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    close_session, create_session, get_session, get_session_owner, list_sessions,
    SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/create-session/", post(create_session))
        .route("/sessions/", get(list_sessions))
        .route("/session/:id", get(get_session))
        .route("/session/:id/end", put(close_session))
        .route("/session/:id/owner/", get(get_session_owner))
        .with_state(handlers)
}
