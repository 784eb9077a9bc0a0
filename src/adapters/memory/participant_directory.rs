use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntityName, ParticipantId};
use crate::domain::participant::Participant;
use crate::ports::ParticipantDirectory;

use super::{key, InMemoryStore, Tables};

#[async_trait]
impl ParticipantDirectory for InMemoryStore {
    async fn resolve_or_create(&self, name: &EntityName) -> Result<Participant, DomainError> {
        let mut tables = self.tables.write().await;

        if let Some(id) = tables.participants_by_name.get(name.as_str()).copied() {
            if let Some(existing) = tables.participant(id) {
                return Ok(existing.clone());
            }
        }

        let id = ParticipantId::from_store(Tables::next_id(tables.participants.len()));
        let participant = Participant::reconstitute(id, name.clone());
        tables.participants.push(participant.clone());
        tables.participants_by_name.insert(key(name), id);
        Ok(participant)
    }

    async fn find_by_name(&self, name: &EntityName) -> Result<Option<Participant>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .participants_by_name
            .get(name.as_str())
            .and_then(|id| tables.participant(*id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> EntityName {
        EntityName::parse("username", raw).unwrap()
    }

    #[tokio::test]
    async fn resolving_twice_returns_the_same_participant() {
        let store = InMemoryStore::new();

        let first = store.resolve_or_create(&name("alice")).await.unwrap();
        let second = store.resolve_or_create(&name("alice")).await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(store.participant_count().await, 1);
    }

    #[tokio::test]
    async fn ids_are_assigned_in_insertion_order() {
        let store = InMemoryStore::new();

        let alice = store.resolve_or_create(&name("alice")).await.unwrap();
        let bob = store.resolve_or_create(&name("bob")).await.unwrap();

        assert_eq!(alice.id().value(), 1);
        assert_eq!(bob.id().value(), 2);
    }

    #[tokio::test]
    async fn find_by_name_does_not_create() {
        let store = InMemoryStore::new();

        assert!(store.find_by_name(&name("ghost")).await.unwrap().is_none());
        assert_eq!(store.participant_count().await, 0);
    }

    #[tokio::test]
    async fn concurrent_resolution_creates_one_participant() {
        let store = InMemoryStore::new();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.resolve_or_create(&name("dave")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id());
        }

        ids.dedup();
        assert_eq!(ids.len(), 1);
        assert_eq!(store.participant_count().await, 1);
    }
}
