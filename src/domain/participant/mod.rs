//! Participant domain module.
//!
//! Participants are created lazily the first time a name is seen (login,
//! session ownership or a submission) and are never deleted.

use serde::Serialize;

use crate::domain::foundation::{EntityName, ParticipantId};

/// A person taking part in group decision sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    id: ParticipantId,
    name: EntityName,
}

impl Participant {
    /// Reconstitute a participant from persistence.
    pub fn reconstitute(id: ParticipantId, name: EntityName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }
}
