//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors surfaced by session, submission and participant operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Participant name is not in the directory.
    ParticipantNotFound(String),
    /// Participant already submitted to this session.
    AlreadySubmitted {
        session_id: SessionId,
        participant: String,
    },
    /// Session is closed and no longer accepts submissions.
    Closed(SessionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Internal contract was broken by the caller.
    PreconditionViolation(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn participant_not_found(name: impl Into<String>) -> Self {
        SessionError::ParticipantNotFound(name.into())
    }
    pub fn already_submitted(session_id: SessionId, participant: impl Into<String>) -> Self {
        SessionError::AlreadySubmitted {
            session_id,
            participant: participant.into(),
        }
    }
    pub fn closed(id: SessionId) -> Self {
        SessionError::Closed(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::ParticipantNotFound(_) => ErrorCode::ParticipantNotFound,
            SessionError::AlreadySubmitted { .. } => ErrorCode::AlreadySubmitted,
            SessionError::Closed(_) => ErrorCode::SessionClosed,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::PreconditionViolation(_) => ErrorCode::PreconditionViolation,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::ParticipantNotFound(name) => format!("User not found: {}", name),
            SessionError::AlreadySubmitted {
                session_id,
                participant,
            } => format!(
                "User {} already submitted a restaurant to session {}",
                participant, session_id
            ),
            SessionError::Closed(id) => format!("Session {} is closed", id),
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SessionError::PreconditionViolation(msg) => format!("Precondition violated: {}", msg),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        let session_id = err
            .details
            .get("session_id")
            .and_then(|raw| raw.parse::<SessionId>().ok());

        match (err.code, session_id) {
            (ErrorCode::SessionNotFound, Some(id)) => SessionError::NotFound(id),
            (ErrorCode::SessionClosed, Some(id)) => SessionError::Closed(id),
            (ErrorCode::AlreadySubmitted, Some(id)) => SessionError::AlreadySubmitted {
                session_id: id,
                participant: err.details.get("participant").cloned().unwrap_or_default(),
            },
            (ErrorCode::ParticipantNotFound, _) => SessionError::ParticipantNotFound(
                err.details
                    .get("participant")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone()),
            ),
            (ErrorCode::ValidationFailed, _) => SessionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            (ErrorCode::PreconditionViolation, _) => {
                SessionError::PreconditionViolation(err.message)
            }
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_session() {
        let err = SessionError::not_found(SessionId::from_store(12));
        assert_eq!(err.message(), "Session not found: 12");
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
    }

    #[test]
    fn participant_not_found_message_names_the_user() {
        let err = SessionError::participant_not_found("carol");
        assert_eq!(err.to_string(), "User not found: carol");
    }

    #[test]
    fn domain_not_found_with_session_detail_maps_to_not_found() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "gone")
            .with_detail("session_id", "5");
        assert_eq!(
            SessionError::from(err),
            SessionError::NotFound(SessionId::from_store(5))
        );
    }

    #[test]
    fn domain_already_submitted_maps_to_conflict_variant() {
        let err = DomainError::new(ErrorCode::AlreadySubmitted, "dup")
            .with_detail("session_id", "3")
            .with_detail("participant", "alice");
        assert_eq!(
            SessionError::from(err),
            SessionError::already_submitted(SessionId::from_store(3), "alice")
        );
    }

    #[test]
    fn domain_validation_keeps_field() {
        let err = DomainError::validation("restaurant_name", "cannot be empty");
        match SessionError::from(err) {
            SessionError::ValidationFailed { field, .. } => assert_eq!(field, "restaurant_name"),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn database_errors_map_to_infrastructure() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection refused");
        assert!(matches!(
            SessionError::from(err),
            SessionError::Infrastructure(_)
        ));
    }

    #[test]
    fn precondition_violation_is_preserved() {
        let err = DomainError::new(ErrorCode::PreconditionViolation, "empty draw");
        assert_eq!(
            SessionError::from(err),
            SessionError::PreconditionViolation("empty draw".to_string())
        );
    }
}
