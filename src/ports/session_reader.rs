//! Session reader port (read side / CQRS queries).
//!
//! Read-optimized views that join a session with the names of its owner and
//! drawn restaurant, as shown to users.

use crate::domain::foundation::{
    DomainError, ParticipantId, Percentage, SessionId, SessionStatus, Timestamp,
};
use async_trait::async_trait;
use serde::Serialize;

/// Reader port for session queries.
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Get a session joined with its owner and result names.
    ///
    /// Returns `None` if not found.
    async fn get_view(&self, id: SessionId) -> Result<Option<SessionView>, DomainError>;

    /// Snapshot of every session, ordered by ID. No pagination.
    async fn list_views(&self) -> Result<Vec<SessionView>, DomainError>;
}

/// Detailed view of a session for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub name: String,
    pub status: SessionStatus,
    pub expected_participants: u32,
    pub progress: Percentage,
    pub owner_id: ParticipantId,
    pub owner_name: String,
    /// Name of the drawn restaurant; only set for closed sessions with
    /// at least one submission.
    pub result: Option<String>,
    pub created_at: Timestamp,
    pub closed_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn SessionReader) {}
    }
}
