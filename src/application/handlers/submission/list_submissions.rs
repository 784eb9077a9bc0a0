//! ListSubmissionsHandler - participant and restaurant names for a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::domain::submission::SubmissionEntry;
use crate::ports::SubmissionLedger;

#[derive(Debug, Clone)]
pub struct ListSubmissionsQuery {
    pub session_id: SessionId,
}

/// Lists submissions in recording order. An unknown session lists nothing.
pub struct ListSubmissionsHandler {
    ledger: Arc<dyn SubmissionLedger>,
}

impl ListSubmissionsHandler {
    pub fn new(ledger: Arc<dyn SubmissionLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        query: ListSubmissionsQuery,
    ) -> Result<Vec<SubmissionEntry>, SessionError> {
        Ok(self.ledger.list_with_names(query.session_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::{
        CreateSessionCommand, CreateSessionHandler, SessionLocks, SubmitRestaurantCommand,
        SubmitRestaurantHandler,
    };
    use crate::domain::foundation::CommandMetadata;

    #[tokio::test]
    async fn lists_names_in_submission_order() {
        let store = InMemoryStore::new();
        let session_id =
            CreateSessionHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
                .handle(
                    CreateSessionCommand {
                        name: "Dinner".to_string(),
                        owner_name: "alice".to_string(),
                        expected_participants: 2,
                    },
                    CommandMetadata::test_fixture(),
                )
                .await
                .unwrap()
                .session
                .id();

        let submit = SubmitRestaurantHandler::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(SessionLocks::new()),
        )
        .with_auto_register_participants(true);
        for (who, what) in [("alice", "Pizza Place"), ("bob", "Sushi Bar")] {
            submit
                .handle(
                    SubmitRestaurantCommand {
                        session_id,
                        participant_name: who.to_string(),
                        restaurant_name: what.to_string(),
                    },
                    CommandMetadata::test_fixture(),
                )
                .await
                .unwrap();
        }

        let entries = ListSubmissionsHandler::new(Arc::new(store))
            .handle(ListSubmissionsQuery { session_id })
            .await
            .unwrap();

        assert_eq!(
            entries,
            vec![
                SubmissionEntry {
                    participant_name: "alice".to_string(),
                    restaurant_name: "Pizza Place".to_string(),
                },
                SubmissionEntry {
                    participant_name: "bob".to_string(),
                    restaurant_name: "Sushi Bar".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn unknown_session_lists_nothing() {
        let entries = ListSubmissionsHandler::new(Arc::new(InMemoryStore::new()))
            .handle(ListSubmissionsQuery {
                session_id: SessionId::from_store(7),
            })
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
