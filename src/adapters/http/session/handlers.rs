//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, parse_session_id, session_error_response};
use crate::application::{
    CloseSessionCommand, CloseSessionHandler, CreateSessionCommand, CreateSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler,
};
use crate::domain::foundation::CommandMetadata;

use super::dto::{
    CloseSessionResponse, CreateSessionRequest, CreateSessionResponse, SessionResponse,
    SessionWithOwnerResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    close_handler: Arc<CloseSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        close_handler: Arc<CloseSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            close_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /create-session/ - Create a new session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let expected_participants = match u32::try_from(req.expected_participants) {
        Ok(count) => count,
        Err(_) => {
            return bad_request(format!(
                "expected_participants must be between 0 and {}, got {}",
                u32::MAX,
                req.expected_participants
            ))
        }
    };

    let cmd = CreateSessionCommand {
        name: req.name,
        owner_name: req.owner_name,
        expected_participants,
    };

    let metadata = CommandMetadata::new().with_source("http");

    match handlers.create_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response = CreateSessionResponse {
                session_id: result.session.id().value(),
                name: result.session.name().to_string(),
                owner_id: result.owner.id().value(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// PUT /session/:id/end - Close a session and draw its result
pub async fn close_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new().with_source("http");

    match handlers
        .close_handler
        .handle(CloseSessionCommand { session_id }, metadata)
        .await
    {
        Ok(result) => {
            let message = if result.newly_closed {
                "Session ended successfully"
            } else {
                "Session already ended"
            };
            let response = CloseSessionResponse {
                message: message.to_string(),
                result: result.result_name,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /sessions/ - List every session
pub async fn list_sessions(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(views) => {
            let response: Vec<SessionResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /session/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(view) => {
            let response: SessionResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /session/:id/owner/ - Get session details with the owner's name
pub async fn get_session_owner(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(view) => {
            let response: SessionWithOwnerResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}
