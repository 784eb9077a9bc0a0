//! LoginHandler - resolves a participant by name, registering it on first use.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EntityName};
use crate::domain::participant::Participant;
use crate::domain::session::SessionError;
use crate::ports::ParticipantDirectory;

/// Command to log in (or register) a participant.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    /// Accepted for client compatibility; never checked.
    pub password: Option<String>,
}

/// Handler for participant login.
pub struct LoginHandler {
    directory: Arc<dyn ParticipantDirectory>,
}

impl LoginHandler {
    pub fn new(directory: Arc<dyn ParticipantDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: LoginCommand,
        metadata: CommandMetadata,
    ) -> Result<Participant, SessionError> {
        let name = EntityName::parse("username", &cmd.username)?;
        let participant = self.directory.resolve_or_create(&name).await?;

        tracing::info!(
            correlation_id = metadata.correlation_id(),
            participant_id = participant.id().value(),
            participant = %participant.name(),
            "Participant logged in"
        );

        Ok(participant)
    }
}
