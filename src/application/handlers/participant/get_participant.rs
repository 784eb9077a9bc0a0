//! GetParticipantHandler - Query handler for looking up a participant by name.

use std::sync::Arc;

use crate::domain::foundation::EntityName;
use crate::domain::participant::Participant;
use crate::domain::session::SessionError;
use crate::ports::ParticipantDirectory;

/// Query to get a participant by name.
#[derive(Debug, Clone)]
pub struct GetParticipantQuery {
    pub username: String,
}

/// Handler for retrieving a participant. Never registers.
pub struct GetParticipantHandler {
    directory: Arc<dyn ParticipantDirectory>,
}

impl GetParticipantHandler {
    pub fn new(directory: Arc<dyn ParticipantDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: GetParticipantQuery) -> Result<Participant, SessionError> {
        let name = EntityName::parse("username", &query.username)?;
        self.directory
            .find_by_name(&name)
            .await?
            .ok_or_else(|| SessionError::participant_not_found(name.into_inner()))
    }
}
