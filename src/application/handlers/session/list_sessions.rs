//! ListSessionsHandler - Query handler listing every session.

use std::sync::Arc;

use crate::domain::session::SessionError;
use crate::ports::{SessionReader, SessionView};

/// Handler returning a snapshot of all sessions, ordered by ID.
pub struct ListSessionsHandler {
    reader: Arc<dyn SessionReader>,
}

impl ListSessionsHandler {
    pub fn new(reader: Arc<dyn SessionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<SessionView>, SessionError> {
        Ok(self.reader.list_views().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::{CreateSessionCommand, CreateSessionHandler};
    use crate::domain::foundation::CommandMetadata;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListSessionsHandler::new(Arc::new(InMemoryStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_sessions_in_creation_order() {
        let store = InMemoryStore::new();
        let create = CreateSessionHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));
        for name in ["Breakfast", "Lunch", "Dinner"] {
            create
                .handle(
                    CreateSessionCommand {
                        name: name.to_string(),
                        owner_name: "alice".to_string(),
                        expected_participants: 2,
                    },
                    CommandMetadata::test_fixture(),
                )
                .await
                .unwrap();
        }

        let names: Vec<_> = ListSessionsHandler::new(Arc::new(store))
            .handle()
            .await
            .unwrap()
            .into_iter()
            .map(|view| view.name)
            .collect();

        assert_eq!(names, vec!["Breakfast", "Lunch", "Dinner"]);
    }
}
