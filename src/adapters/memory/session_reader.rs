use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use crate::ports::{SessionReader, SessionView};

use super::{InMemoryStore, Tables};

fn to_view(tables: &Tables, session: &Session) -> SessionView {
    SessionView {
        id: session.id(),
        name: session.name().to_string(),
        status: session.status(),
        expected_participants: session.expected_participants(),
        progress: session.progress(),
        owner_id: session.owner_id(),
        owner_name: tables.participant_name(session.owner_id()),
        result: session.result().and_then(|id| tables.restaurant_name(id)),
        created_at: *session.created_at(),
        closed_at: session.closed_at().copied(),
    }
}

#[async_trait]
impl SessionReader for InMemoryStore {
    async fn get_view(&self, id: SessionId) -> Result<Option<SessionView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .session_index(id)
            .map(|i| to_view(&tables, &tables.sessions[i])))
    }

    async fn list_views(&self) -> Result<Vec<SessionView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .sessions
            .iter()
            .map(|session| to_view(&tables, session))
            .collect())
    }
}
