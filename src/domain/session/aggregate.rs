//! Session aggregate entity.
//!
//! A session collects one restaurant submission per participant and, once
//! closed by its owner, records a single randomly drawn result.
//!
//! # Ownership
//!
//! Sessions reference their owner and result by ID but do NOT own them.
//! Participants and restaurants live in the directory and catalog.

use crate::domain::foundation::{
    DomainError, EntityName, ErrorCode, ParticipantId, Percentage, RestaurantId, SessionId,
    SessionStatus, StateMachine, Timestamp,
};
use serde::Serialize;

/// Data needed to insert a new session; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub name: EntityName,
    pub owner_id: ParticipantId,
    pub expected_participants: u32,
    pub created_at: Timestamp,
}

impl NewSession {
    pub fn new(name: EntityName, owner_id: ParticipantId, expected_participants: u32) -> Self {
        Self {
            name,
            owner_id,
            expected_participants,
            created_at: Timestamp::now(),
        }
    }
}

/// Session aggregate - one group decision.
///
/// # Invariants
///
/// - `progress` is `round(count * 100 / expected_participants)`, or 0 when
///   no participants are expected
/// - `result` is only set when `status` is `Closed`
/// - `Closed` is terminal; the result never changes after closing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    name: EntityName,
    owner_id: ParticipantId,
    status: SessionStatus,
    expected_participants: u32,
    progress: Percentage,
    result: Option<RestaurantId>,
    created_at: Timestamp,
    closed_at: Option<Timestamp>,
}

impl Session {
    /// Materialize a freshly inserted session: open, no progress, no result.
    pub fn open(id: SessionId, new: NewSession) -> Self {
        Self {
            id,
            name: new.name,
            owner_id: new.owner_id,
            status: SessionStatus::Open,
            expected_participants: new.expected_participants,
            progress: Percentage::ZERO,
            result: None,
            created_at: new.created_at,
            closed_at: None,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        name: EntityName,
        owner_id: ParticipantId,
        status: SessionStatus,
        expected_participants: u32,
        progress: Percentage,
        result: Option<RestaurantId>,
        created_at: Timestamp,
        closed_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            status,
            expected_participants,
            progress,
            result,
            created_at,
            closed_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn owner_id(&self) -> ParticipantId {
        self.owner_id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        self.status == SessionStatus::Closed
    }

    pub fn expected_participants(&self) -> u32 {
        self.expected_participants
    }

    pub fn progress(&self) -> Percentage {
        self.progress
    }

    /// The drawn restaurant, if the session closed with submissions.
    pub fn result(&self) -> Option<RestaurantId> {
        self.result
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn closed_at(&self) -> Option<&Timestamp> {
        self.closed_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute progress from the current number of submissions.
    ///
    /// Returns the new progress value.
    pub fn record_progress(&mut self, submission_count: u64) -> Percentage {
        self.progress = Percentage::from_ratio(submission_count, self.expected_participants);
        self.progress
    }

    /// Ensures the session still accepts submissions.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` once the session has been closed
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.status.accepts_submissions() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionClosed,
                format!("Session {} is closed", self.id),
            )
            .with_detail("session_id", self.id.to_string()))
        }
    }

    /// Close the session, recording the drawn result (if any).
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if already closed
    pub fn close(&mut self, result: Option<RestaurantId>) -> Result<(), DomainError> {
        let next = self
            .status
            .transition_to(SessionStatus::Closed)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Session {} is already closed", self.id),
                )
            })?;

        self.status = next;
        self.result = result;
        self.closed_at = Some(Timestamp::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session(expected: u32) -> Session {
        let new = NewSession::new(
            EntityName::parse("name", "Dinner").unwrap(),
            ParticipantId::from_store(1),
            expected,
        );
        Session::open(SessionId::from_store(1), new)
    }

    #[test]
    fn new_session_is_open_with_zero_progress() {
        let session = test_session(2);
        assert_eq!(session.status(), SessionStatus::Open);
        assert_eq!(session.progress(), Percentage::ZERO);
        assert!(session.result().is_none());
        assert!(session.closed_at().is_none());
    }

    #[test]
    fn record_progress_follows_submission_count() {
        let mut session = test_session(2);
        assert_eq!(session.record_progress(1).value(), 50);
        assert_eq!(session.record_progress(2).value(), 100);
    }

    #[test]
    fn record_progress_is_zero_without_expected_participants() {
        let mut session = test_session(0);
        assert_eq!(session.record_progress(5), Percentage::ZERO);
    }

    #[test]
    fn close_records_result_and_timestamp() {
        let mut session = test_session(2);
        session.close(Some(RestaurantId::from_store(4))).unwrap();

        assert!(session.is_closed());
        assert_eq!(session.result(), Some(RestaurantId::from_store(4)));
        assert!(session.closed_at().is_some());
    }

    #[test]
    fn close_without_submissions_leaves_result_unset() {
        let mut session = test_session(3);
        session.close(None).unwrap();

        assert!(session.is_closed());
        assert!(session.result().is_none());
    }

    #[test]
    fn close_twice_fails_and_keeps_first_result() {
        let mut session = test_session(2);
        session.close(Some(RestaurantId::from_store(1))).unwrap();

        let err = session.close(Some(RestaurantId::from_store(2))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(session.result(), Some(RestaurantId::from_store(1)));
    }

    #[test]
    fn ensure_open_rejects_closed_sessions() {
        let mut session = test_session(2);
        assert!(session.ensure_open().is_ok());

        session.close(None).unwrap();
        let err = session.ensure_open().unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionClosed);
    }
}
