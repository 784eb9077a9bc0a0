use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, SessionId};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionRepository;

use super::{InMemoryStore, Tables};

fn session_not_found(id: SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
        .with_detail("session_id", id.to_string())
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.participant(session.owner_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Owner {} does not exist", session.owner_id),
            ));
        }

        let id = SessionId::from_store(Tables::next_id(tables.sessions.len()));
        let created = Session::open(id, session.clone());
        tables.sessions.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.session_index(id).map(|i| tables.sessions[i].clone()))
    }

    async fn exists(&self, id: SessionId) -> Result<bool, DomainError> {
        Ok(self.tables.read().await.session_index(id).is_some())
    }

    async fn update_progress(
        &self,
        id: SessionId,
        progress: Percentage,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let index = tables.session_index(id).ok_or_else(|| session_not_found(id))?;

        let stored = &tables.sessions[index];
        let updated = Session::reconstitute(
            stored.id(),
            stored.name().clone(),
            stored.owner_id(),
            stored.status(),
            stored.expected_participants(),
            progress,
            stored.result(),
            *stored.created_at(),
            stored.closed_at().copied(),
        );
        tables.sessions[index] = updated;
        Ok(())
    }

    async fn close_if_open(&self, session: &Session) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .session_index(session.id())
            .ok_or_else(|| session_not_found(session.id()))?;

        if tables.sessions[index].is_closed() {
            return Ok(false);
        }

        let stored = &tables.sessions[index];
        let closed = Session::reconstitute(
            stored.id(),
            stored.name().clone(),
            stored.owner_id(),
            session.status(),
            stored.expected_participants(),
            stored.progress(),
            session.result(),
            *stored.created_at(),
            session.closed_at().copied(),
        );
        tables.sessions[index] = closed;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EntityName, ParticipantId, RestaurantId};
    use crate::ports::ParticipantDirectory;

    async fn store_with_owner() -> (InMemoryStore, ParticipantId) {
        let store = InMemoryStore::new();
        let owner = store
            .resolve_or_create(&EntityName::parse("owner_name", "alice").unwrap())
            .await
            .unwrap();
        (store, owner.id())
    }

    fn dinner(owner: ParticipantId) -> NewSession {
        NewSession::new(EntityName::parse("name", "Dinner").unwrap(), owner, 2)
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let (store, owner) = store_with_owner().await;

        let first = store.insert(&dinner(owner)).await.unwrap();
        let second = store.insert(&dinner(owner)).await.unwrap();

        assert_eq!(first.id().value(), 1);
        assert_eq!(second.id().value(), 2);
        assert!(!first.is_closed());
    }

    #[tokio::test]
    async fn insert_rejects_unknown_owner() {
        let store = InMemoryStore::new();
        let err = store
            .insert(&dinner(ParticipantId::from_store(9)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn update_progress_persists_value() {
        let (store, owner) = store_with_owner().await;
        let session = store.insert(&dinner(owner)).await.unwrap();

        store
            .update_progress(session.id(), Percentage::new(50))
            .await
            .unwrap();

        let stored = store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.progress().value(), 50);
    }

    #[tokio::test]
    async fn update_progress_on_missing_session_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .update_progress(SessionId::from_store(3), Percentage::ZERO)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn close_if_open_only_succeeds_once() {
        let (store, owner) = store_with_owner().await;
        let session = store.insert(&dinner(owner)).await.unwrap();

        let mut first = session.clone();
        first.close(Some(RestaurantId::from_store(1))).unwrap();
        assert!(store.close_if_open(&first).await.unwrap());

        let mut second = session;
        second.close(Some(RestaurantId::from_store(2))).unwrap();
        assert!(!store.close_if_open(&second).await.unwrap());

        let stored = store.find_by_id(first.id()).await.unwrap().unwrap();
        assert_eq!(stored.result(), Some(RestaurantId::from_store(1)));
    }
}
