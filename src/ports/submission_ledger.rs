//! Submission ledger port.
//!
//! Records (participant, session, restaurant) facts. Implementations must
//! enforce at most one submission per participant per session.

use crate::domain::foundation::{DomainError, ParticipantId, SessionId};
use crate::domain::submission::{NewSubmission, Submission, SubmissionEntry};
use async_trait::async_trait;

#[async_trait]
pub trait SubmissionLedger: Send + Sync {
    /// Record a new submission.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the participant already submitted to the session
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, DomainError>;

    /// All submissions for a session, in insertion order.
    async fn list_for_session(&self, session_id: SessionId)
        -> Result<Vec<Submission>, DomainError>;

    /// Number of submissions recorded for a session.
    async fn count_for_session(&self, session_id: SessionId) -> Result<u64, DomainError>;

    /// The participant's submission to a session, if any.
    async fn find_for_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> Result<Option<Submission>, DomainError>;

    /// Submissions joined with participant and restaurant names.
    async fn list_with_names(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<SubmissionEntry>, DomainError>;
}
