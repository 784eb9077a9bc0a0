//! Request and response DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::ports::SessionView;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /create-session/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub owner_name: String,
    /// Signed so a negative count is reported as a validation error rather
    /// than a JSON decoding failure.
    #[serde(alias = "session_participants")]
    pub expected_participants: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: i64,
    pub name: String,
    pub owner_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseSessionResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Session record as listed and fetched by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: i64,
    pub name: String,
    pub status: SessionStatus,
    pub expected_participants: u32,
    pub progress: u8,
    pub owner_id: i64,
    /// Drawn restaurant name; null until closed with submissions.
    pub result: Option<String>,
    pub created_at: String,
    pub closed_at: Option<String>,
}

impl From<SessionView> for SessionResponse {
    fn from(view: SessionView) -> Self {
        Self {
            id: view.id.value(),
            name: view.name,
            status: view.status,
            expected_participants: view.expected_participants,
            progress: view.progress.value(),
            owner_id: view.owner_id.value(),
            result: view.result,
            created_at: view.created_at.to_rfc3339(),
            closed_at: view.closed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Session record extended with the owner's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionWithOwnerResponse {
    #[serde(flatten)]
    pub session: SessionResponse,
    pub owner_name: String,
}

impl From<SessionView> for SessionWithOwnerResponse {
    fn from(view: SessionView) -> Self {
        let owner_name = view.owner_name.clone();
        Self {
            session: view.into(),
            owner_name,
        }
    }
}
