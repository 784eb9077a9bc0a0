//! Session repository port (write side).
//!
//! Defines the contract for persisting and retrieving Session aggregates.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Write-focused**: Optimized for aggregate persistence
//! - **Guarded close**: closing is a compare-and-swap on the open status, so
//!   two closers can never both record a result

use crate::domain::foundation::{DomainError, Percentage, SessionId};
use crate::domain::session::{NewSession, Session};
use async_trait::async_trait;

/// Repository port for Session aggregate persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a new open session, returning it with its assigned ID.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including an unknown owner)
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError>;

    /// Check if a session exists.
    async fn exists(&self, id: SessionId) -> Result<bool, DomainError>;

    /// Persist a recomputed progress value.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update_progress(&self, id: SessionId, progress: Percentage)
        -> Result<(), DomainError>;

    /// Persist the open -> closed transition of `session` (status, result
    /// and closed_at), only if the stored session is still open.
    ///
    /// Returns `false` when the stored session was already closed, in which
    /// case nothing is written.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn close_if_open(&self, session: &Session) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
