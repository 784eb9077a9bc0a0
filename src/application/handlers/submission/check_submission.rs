//! CheckSubmissionHandler - reports whether a participant has submitted.

use std::sync::Arc;

use crate::domain::foundation::{EntityName, SessionId};
use crate::domain::session::SessionError;
use crate::ports::{ParticipantDirectory, RestaurantCatalog, SubmissionLedger};

/// Query for one participant's submission in a session.
#[derive(Debug, Clone)]
pub struct CheckSubmissionQuery {
    pub session_id: SessionId,
    pub username: String,
}

/// Whether the participant submitted, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub submitted: bool,
    pub restaurant_name: Option<String>,
}

pub struct CheckSubmissionHandler {
    directory: Arc<dyn ParticipantDirectory>,
    catalog: Arc<dyn RestaurantCatalog>,
    ledger: Arc<dyn SubmissionLedger>,
}

impl CheckSubmissionHandler {
    pub fn new(
        directory: Arc<dyn ParticipantDirectory>,
        catalog: Arc<dyn RestaurantCatalog>,
        ledger: Arc<dyn SubmissionLedger>,
    ) -> Self {
        Self {
            directory,
            catalog,
            ledger,
        }
    }

    pub async fn handle(&self, query: CheckSubmissionQuery) -> Result<SubmissionStatus, SessionError> {
        let name = EntityName::parse("username", &query.username)?;
        let participant = self
            .directory
            .find_by_name(&name)
            .await?
            .ok_or_else(|| SessionError::participant_not_found(name.as_str()))?;

        let Some(submission) = self
            .ledger
            .find_for_participant(query.session_id, participant.id())
            .await?
        else {
            return Ok(SubmissionStatus {
                submitted: false,
                restaurant_name: None,
            });
        };

        let restaurant = self
            .catalog
            .find_by_id(submission.restaurant_id())
            .await?
            .ok_or_else(|| {
                SessionError::infrastructure(format!(
                    "Restaurant {} referenced by submission {} is missing",
                    submission.restaurant_id(),
                    submission.id()
                ))
            })?;

        Ok(SubmissionStatus {
            submitted: true,
            restaurant_name: Some(restaurant.name().to_string()),
        })
    }
}
