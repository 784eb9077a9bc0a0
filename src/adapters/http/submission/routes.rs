//! HTTP routes for submission endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{check_submission, list_submissions, submit_restaurant, SubmissionHandlers};

/// Creates the submission router with all endpoints.
pub fn submission_routes(handlers: SubmissionHandlers) -> Router {
    Router::new()
        .route("/submit-restaurant/", post(submit_restaurant))
        .route(
            "/check-submission/:session_id/:username",
            get(check_submission),
        )
        .route("/session/:id/submissions", get(list_submissions))
        .with_state(handlers)
}
