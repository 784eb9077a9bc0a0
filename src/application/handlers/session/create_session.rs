//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EntityName};
use crate::domain::participant::Participant;
use crate::domain::session::{NewSession, Session, SessionError};
use crate::ports::{ParticipantDirectory, SessionRepository};

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub name: String,
    pub owner_name: String,
    pub expected_participants: u32,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session: Session,
    pub owner: Participant,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    directory: Arc<dyn ParticipantDirectory>,
}

impl CreateSessionHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        directory: Arc<dyn ParticipantDirectory>,
    ) -> Self {
        Self {
            repository,
            directory,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateSessionResult, SessionError> {
        // 1. Validate input before touching the store
        let name = EntityName::parse("name", &cmd.name)?;
        let owner_name = EntityName::parse("owner_name", &cmd.owner_name)?;

        // 2. Resolve the owner, registering on first sight
        let owner = self.directory.resolve_or_create(&owner_name).await?;

        // 3. Persist the session
        let session = self
            .repository
            .insert(&NewSession::new(name, owner.id(), cmd.expected_participants))
            .await?;

        tracing::info!(
            correlation_id = metadata.correlation_id(),
            session_id = session.id().value(),
            owner = %owner.name(),
            expected_participants = session.expected_participants(),
            "Session created"
        );

        Ok(CreateSessionResult { session, owner })
    }
}
