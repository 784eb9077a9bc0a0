//! Participant directory port.
//!
//! A key-value directory keyed by participant name. Names are unique.

use crate::domain::foundation::{DomainError, EntityName};
use crate::domain::participant::Participant;
use async_trait::async_trait;

#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    /// Look up a participant by name, creating it on first sight.
    ///
    /// Concurrent calls with the same new name must return the same
    /// participant.
    async fn resolve_or_create(&self, name: &EntityName) -> Result<Participant, DomainError>;

    /// Look up a participant by name without creating it.
    async fn find_by_name(&self, name: &EntityName) -> Result<Option<Participant>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn ParticipantDirectory) {}
    }
}
