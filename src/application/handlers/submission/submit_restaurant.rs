//! SubmitRestaurantHandler - records a participant's restaurant choice.

use std::sync::Arc;

use crate::application::SessionLocks;
use crate::domain::foundation::{CommandMetadata, EntityName, ErrorCode, Percentage, SessionId};
use crate::domain::participant::Participant;
use crate::domain::session::SessionError;
use crate::domain::submission::{NewSubmission, Submission};
use crate::ports::{ParticipantDirectory, RestaurantCatalog, SessionRepository, SubmissionLedger};

/// Command to submit a restaurant to a session.
#[derive(Debug, Clone)]
pub struct SubmitRestaurantCommand {
    pub session_id: SessionId,
    pub participant_name: String,
    pub restaurant_name: String,
}

/// Result of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmitRestaurantResult {
    pub submission: Submission,
    pub progress: Percentage,
}

/// Handler for restaurant submissions.
///
/// The whole record-and-recompute sequence runs under the session's lock so
/// progress always reflects the submission count at the time of writing.
pub struct SubmitRestaurantHandler {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn ParticipantDirectory>,
    catalog: Arc<dyn RestaurantCatalog>,
    ledger: Arc<dyn SubmissionLedger>,
    locks: Arc<SessionLocks>,
    auto_register_participants: bool,
}

impl SubmitRestaurantHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        directory: Arc<dyn ParticipantDirectory>,
        catalog: Arc<dyn RestaurantCatalog>,
        ledger: Arc<dyn SubmissionLedger>,
        locks: Arc<SessionLocks>,
    ) -> Self {
        Self {
            sessions,
            directory,
            catalog,
            ledger,
            locks,
            auto_register_participants: false,
        }
    }

    /// When enabled, unknown participant names are registered on first
    /// submission instead of rejected.
    pub fn with_auto_register_participants(mut self, enabled: bool) -> Self {
        self.auto_register_participants = enabled;
        self
    }

    pub async fn handle(
        &self,
        cmd: SubmitRestaurantCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitRestaurantResult, SessionError> {
        let participant_name = EntityName::parse("user_name", &cmd.participant_name)?;
        let restaurant_name = EntityName::parse("restaurant_name", &cmd.restaurant_name)?;

        // Unknown ids are rejected before they reach the lock table
        if !self.sessions.exists(cmd.session_id).await? {
            return Err(SessionError::not_found(cmd.session_id));
        }
        let _guard = self.locks.lock(cmd.session_id).await;

        // 1. Session must exist and still be open
        let mut session = self
            .sessions
            .find_by_id(cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;
        session.ensure_open()?;

        // 2. Resolve the participant and reject repeat submissions
        let participant = self.resolve_participant(&participant_name).await?;
        let already_submitted = self
            .ledger
            .find_for_participant(session.id(), participant.id())
            .await?
            .is_some();
        if already_submitted {
            return Err(SessionError::already_submitted(
                session.id(),
                participant_name.into_inner(),
            ));
        }

        // 3. Resolve the restaurant and record the choice
        let restaurant = self.catalog.resolve_or_create(&restaurant_name).await?;
        let submission = self
            .ledger
            .insert(&NewSubmission::new(
                session.id(),
                participant.id(),
                restaurant.id(),
            ))
            .await
            .map_err(|e| {
                if e.code == ErrorCode::AlreadySubmitted {
                    SessionError::already_submitted(session.id(), participant_name.as_str())
                } else {
                    e.into()
                }
            })?;

        // 4. Recompute progress from the authoritative count
        let count = self.ledger.count_for_session(session.id()).await?;
        let progress = session.record_progress(count);
        self.sessions.update_progress(session.id(), progress).await?;

        tracing::info!(
            correlation_id = metadata.correlation_id(),
            session_id = session.id().value(),
            participant = %participant.name(),
            restaurant = %restaurant.name(),
            progress = progress.value(),
            "Restaurant submitted"
        );

        Ok(SubmitRestaurantResult {
            submission,
            progress,
        })
    }

    async fn resolve_participant(&self, name: &EntityName) -> Result<Participant, SessionError> {
        if self.auto_register_participants {
            return Ok(self.directory.resolve_or_create(name).await?);
        }
        self.directory
            .find_by_name(name)
            .await?
            .ok_or_else(|| SessionError::participant_not_found(name.as_str()))
    }
}
