//! CloseSessionHandler - closes a session and draws its result.

use std::sync::Arc;

use crate::application::SessionLocks;
use crate::domain::foundation::{CommandMetadata, SessionId};
use crate::domain::resolution::ResolutionEngine;
use crate::domain::session::{Session, SessionError};
use crate::ports::{RestaurantCatalog, SessionRepository, SubmissionLedger};

/// Command to close a session.
#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: SessionId,
}

/// Outcome of a close request.
#[derive(Debug, Clone)]
pub struct CloseSessionResult {
    pub session: Session,
    /// Name of the drawn restaurant; `None` when nobody submitted.
    pub result_name: Option<String>,
    /// False when the session was already closed and nothing changed.
    pub newly_closed: bool,
}

/// Handler for closing sessions.
///
/// Closing is a one-time transition: the first close draws and records the
/// result, later closes return it unchanged.
pub struct CloseSessionHandler {
    repository: Arc<dyn SessionRepository>,
    ledger: Arc<dyn SubmissionLedger>,
    catalog: Arc<dyn RestaurantCatalog>,
    engine: Arc<ResolutionEngine>,
    locks: Arc<SessionLocks>,
}

impl CloseSessionHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        ledger: Arc<dyn SubmissionLedger>,
        catalog: Arc<dyn RestaurantCatalog>,
        engine: Arc<ResolutionEngine>,
        locks: Arc<SessionLocks>,
    ) -> Self {
        Self {
            repository,
            ledger,
            catalog,
            engine,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: CloseSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<CloseSessionResult, SessionError> {
        if !self.repository.exists(cmd.session_id).await? {
            return Err(SessionError::not_found(cmd.session_id));
        }
        let _guard = self.locks.lock(cmd.session_id).await;

        let mut session = self.load(cmd.session_id).await?;
        if session.is_closed() {
            tracing::debug!(
                correlation_id = metadata.correlation_id(),
                session_id = session.id().value(),
                "Session already closed"
            );
            return self.already_closed(session).await;
        }

        // Draw from every submission; no submissions means no result.
        let submissions = self.ledger.list_for_session(session.id()).await?;
        let drawn = if submissions.is_empty() {
            None
        } else {
            Some(self.engine.select(&submissions)?.restaurant_id())
        };

        session.close(drawn)?;
        if !self.repository.close_if_open(&session).await? {
            // Another writer closed it between our read and write.
            tracing::warn!(
                correlation_id = metadata.correlation_id(),
                session_id = session.id().value(),
                "Lost close race; keeping recorded result"
            );
            let current = self.load(session.id()).await?;
            return self.already_closed(current).await;
        }

        let result_name = self.result_name(&session).await?;
        tracing::info!(
            correlation_id = metadata.correlation_id(),
            session_id = session.id().value(),
            submissions = submissions.len(),
            result = result_name.as_deref().unwrap_or("<none>"),
            "Session closed"
        );

        Ok(CloseSessionResult {
            session,
            result_name,
            newly_closed: true,
        })
    }

    async fn load(&self, id: SessionId) -> Result<Session, SessionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SessionError::not_found(id))
    }

    async fn already_closed(&self, session: Session) -> Result<CloseSessionResult, SessionError> {
        let result_name = self.result_name(&session).await?;
        Ok(CloseSessionResult {
            session,
            result_name,
            newly_closed: false,
        })
    }

    async fn result_name(&self, session: &Session) -> Result<Option<String>, SessionError> {
        let Some(restaurant_id) = session.result() else {
            return Ok(None);
        };
        let restaurant = self
            .catalog
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| {
                SessionError::infrastructure(format!(
                    "Result restaurant {} of session {} is missing",
                    restaurant_id,
                    session.id()
                ))
            })?;
        Ok(Some(restaurant.name().to_string()))
    }
}
