//! Request and response DTOs for participant endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::participant::Participant;

/// Body of `POST /login/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub participant_id: i64,
    pub username: String,
}

impl From<Participant> for LoginResponse {
    fn from(participant: Participant) -> Self {
        Self {
            participant_id: participant.id().value(),
            username: participant.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub id: i64,
    pub name: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id().value(),
            name: participant.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_password_is_optional() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.password.is_none());
    }
}
