use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, SessionId, SubmissionId};
use crate::domain::submission::{NewSubmission, Submission, SubmissionEntry};
use crate::ports::SubmissionLedger;

use super::{InMemoryStore, Tables};

#[async_trait]
impl SubmissionLedger for InMemoryStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.session_index(submission.session_id).is_none()
            || tables.participant(submission.participant_id).is_none()
            || tables.restaurant(submission.restaurant_id).is_none()
        {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Submission references a missing session, participant or restaurant",
            ));
        }

        let duplicate = tables.submissions.iter().any(|s| {
            s.session_id() == submission.session_id
                && s.participant_id() == submission.participant_id
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::AlreadySubmitted,
                format!(
                    "Participant {} already submitted to session {}",
                    submission.participant_id, submission.session_id
                ),
            )
            .with_detail("session_id", submission.session_id.to_string()));
        }

        let id = SubmissionId::from_store(Tables::next_id(tables.submissions.len()));
        let recorded = Submission::recorded(id, submission.clone());
        tables.submissions.push(recorded.clone());
        Ok(recorded)
    }

    async fn list_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<Submission>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .submissions
            .iter()
            .filter(|s| s.session_id() == session_id)
            .cloned()
            .collect())
    }

    async fn count_for_session(&self, session_id: SessionId) -> Result<u64, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .submissions
            .iter()
            .filter(|s| s.session_id() == session_id)
            .count() as u64)
    }

    async fn find_for_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> Result<Option<Submission>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .submissions
            .iter()
            .find(|s| s.session_id() == session_id && s.participant_id() == participant_id)
            .cloned())
    }

    async fn list_with_names(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<SubmissionEntry>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .submissions
            .iter()
            .filter(|s| s.session_id() == session_id)
            .map(|s| SubmissionEntry {
                participant_name: tables.participant_name(s.participant_id()),
                restaurant_name: tables
                    .restaurant_name(s.restaurant_id())
                    .unwrap_or_default(),
            })
            .collect())
    }
}
