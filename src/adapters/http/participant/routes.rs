//! HTTP routes for participant endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_participant, login, ParticipantHandlers};

/// Creates the participant router with all endpoints.
pub fn participant_routes(handlers: ParticipantHandlers) -> Router {
    Router::new()
        .route("/login/", post(login))
        .route("/user/:username", get(get_participant))
        .with_state(handlers)
}
