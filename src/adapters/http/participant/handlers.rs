//! HTTP handlers for participant endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::session_error_response;
use crate::application::{GetParticipantHandler, GetParticipantQuery, LoginCommand, LoginHandler};
use crate::domain::foundation::CommandMetadata;

use super::dto::{LoginRequest, LoginResponse, ParticipantResponse};

#[derive(Clone)]
pub struct ParticipantHandlers {
    login_handler: Arc<LoginHandler>,
    get_handler: Arc<GetParticipantHandler>,
}

impl ParticipantHandlers {
    pub fn new(login_handler: Arc<LoginHandler>, get_handler: Arc<GetParticipantHandler>) -> Self {
        Self {
            login_handler,
            get_handler,
        }
    }
}

/// POST /login/ - Resolve a participant, registering on first use
pub async fn login(
    State(handlers): State<ParticipantHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        username: req.username,
        password: req.password,
    };

    let metadata = CommandMetadata::new().with_source("http");

    match handlers.login_handler.handle(cmd, metadata).await {
        Ok(participant) => {
            let response: LoginResponse = participant.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /user/:username - Look up a participant by name
pub async fn get_participant(
    State(handlers): State<ParticipantHandlers>,
    Path(username): Path<String>,
) -> Response {
    match handlers
        .get_handler
        .handle(GetParticipantQuery { username })
        .await
    {
        Ok(participant) => {
            let response: ParticipantResponse = participant.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => session_error_response(e),
    }
}
