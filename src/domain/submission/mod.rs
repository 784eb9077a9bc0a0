//! Submission domain module.
//!
//! A submission is an immutable fact: participant P chose restaurant R in
//! session S. Each participant submits at most once per session.

use serde::Serialize;

use crate::domain::foundation::{
    ParticipantId, RestaurantId, SessionId, SubmissionId, Timestamp,
};

/// Data needed to record a submission; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub session_id: SessionId,
    pub participant_id: ParticipantId,
    pub restaurant_id: RestaurantId,
    pub submitted_at: Timestamp,
}

impl NewSubmission {
    pub fn new(
        session_id: SessionId,
        participant_id: ParticipantId,
        restaurant_id: RestaurantId,
    ) -> Self {
        Self {
            session_id,
            participant_id,
            restaurant_id,
            submitted_at: Timestamp::now(),
        }
    }
}

/// A recorded restaurant choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    id: SubmissionId,
    session_id: SessionId,
    participant_id: ParticipantId,
    restaurant_id: RestaurantId,
    submitted_at: Timestamp,
}

impl Submission {
    /// Materialize a freshly inserted submission.
    pub fn recorded(id: SubmissionId, new: NewSubmission) -> Self {
        Self {
            id,
            session_id: new.session_id,
            participant_id: new.participant_id,
            restaurant_id: new.restaurant_id,
            submitted_at: new.submitted_at,
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }
}

/// Display row joining a submission with participant and restaurant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionEntry {
    pub participant_name: String,
    pub restaurant_name: String,
}
