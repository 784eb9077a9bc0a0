//! HTTP handlers for submission endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{parse_session_id, session_error_response, session_id_from};
use crate::application::{
    CheckSubmissionHandler, CheckSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    SubmitRestaurantCommand, SubmitRestaurantHandler,
};
use crate::domain::foundation::CommandMetadata;

use super::dto::{CheckSubmissionResponse, SubmitRestaurantRequest, SubmitRestaurantResponse};

#[derive(Clone)]
pub struct SubmissionHandlers {
    submit_handler: Arc<SubmitRestaurantHandler>,
    check_handler: Arc<CheckSubmissionHandler>,
    list_handler: Arc<ListSubmissionsHandler>,
}

impl SubmissionHandlers {
    pub fn new(
        submit_handler: Arc<SubmitRestaurantHandler>,
        check_handler: Arc<CheckSubmissionHandler>,
        list_handler: Arc<ListSubmissionsHandler>,
    ) -> Self {
        Self {
            submit_handler,
            check_handler,
            list_handler,
        }
    }
}

/// POST /submit-restaurant/ - Record a participant's restaurant choice
pub async fn submit_restaurant(
    State(handlers): State<SubmissionHandlers>,
    Json(req): Json<SubmitRestaurantRequest>,
) -> Response {
    let session_id = match session_id_from(req.session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitRestaurantCommand {
        session_id,
        participant_name: req.user_name,
        restaurant_name: req.restaurant_name,
    };

    let metadata = CommandMetadata::new().with_source("http");

    match handlers.submit_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response = SubmitRestaurantResponse {
                message: "Restaurant submitted successfully".to_string(),
                progress: result.progress.value(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /check-submission/:session_id/:username - Has this participant submitted?
pub async fn check_submission(
    State(handlers): State<SubmissionHandlers>,
    Path((session_id, username)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = CheckSubmissionQuery {
        session_id,
        username,
    };

    match handlers.check_handler.handle(query).await {
        Ok(status) => {
            let response: CheckSubmissionResponse = status.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /session/:id/submissions - Participant and restaurant names
pub async fn list_submissions(
    State(handlers): State<SubmissionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .list_handler
        .handle(ListSubmissionsQuery { session_id })
        .await
    {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => session_error_response(e),
    }
}
