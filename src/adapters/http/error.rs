//! Error bodies and the mapping from `SessionError` to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// 400 response for a malformed path or body value.
pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

/// Parses a session ID path segment.
///
/// Non-integers answer 400; integers no session can carry answer 404.
pub fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| bad_request(format!("Invalid session ID: {}", raw)))?;
    session_id_from(value)
}

/// Converts a numeric session ID, answering 404 for zero and negatives.
pub fn session_id_from(value: i64) -> Result<SessionId, Response> {
    SessionId::new(value).map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &value.to_string())),
        )
            .into_response()
    })
}

/// Maps a `SessionError` to its HTTP response.
pub fn session_error_response(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        SessionError::ParticipantNotFound(name) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("User", &name)),
        )
            .into_response(),
        SessionError::ValidationFailed { field, message } => {
            let body =
                ErrorResponse::bad_request(format!("Validation failed for {}: {}", field, message))
                    .with_details(serde_json::json!({ "field": field }));
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        e @ (SessionError::AlreadySubmitted { .. } | SessionError::Closed(_)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(e.message())),
        )
            .into_response(),
        SessionError::PreconditionViolation(msg) => {
            tracing::error!(error = %msg, "Precondition violated");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An internal error occurred")),
            )
                .into_response()
        }
        SessionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Infrastructure failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An internal error occurred")),
            )
                .into_response()
        }
    }
}
