//! PostgreSQL implementation of SessionRepository.
//!
//! Persists Session aggregates to PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage, SessionId};
use crate::domain::session::{NewSession, Session};
use crate::ports::SessionRepository;

use super::rows::{column, row_to_session, SESSION_COLUMNS};

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn session_not_found(id: SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
        .with_detail("session_id", id.to_string())
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError> {
        let expected = i32::try_from(session.expected_participants).map_err(|_| {
            DomainError::validation(
                "expected_participants",
                format!("{} is too large", session.expected_participants),
            )
        })?;

        let row = sqlx::query(
            r#"
            INSERT INTO sessions (
                name, status, expected_participants, progress, owner_id, created_at
            ) VALUES ($1, 'open', $2, 0, $3, $4)
            RETURNING id
            "#,
        )
        .bind(session.name.as_str())
        .bind(expected)
        .bind(session.owner_id.value())
        .bind(session.created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        let id = SessionId::from_store(column(&row, "id")?);
        Ok(Session::open(id, session.clone()))
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        let query = format!("SELECT {} FROM sessions s WHERE s.id = $1", SESSION_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn exists(&self, id: SessionId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions WHERE id = $1")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check session existence", e))?;

        Ok(result.0 > 0)
    }

    async fn update_progress(
        &self,
        id: SessionId,
        progress: Percentage,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE sessions SET progress = $2 WHERE id = $1")
            .bind(id.value())
            .bind(i16::from(progress.value()))
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to update session progress", e))?;

        if result.rows_affected() == 0 {
            return Err(session_not_found(id));
        }

        Ok(())
    }

    async fn close_if_open(&self, session: &Session) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                status = $2,
                result_id = $3,
                closed_at = $4
            WHERE id = $1 AND status = 'open'
            "#,
        )
        .bind(session.id().value())
        .bind(session.status().as_str())
        .bind(session.result().map(|r| r.value()))
        .bind(session.closed_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to close session", e))?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        if self.exists(session.id()).await? {
            Ok(false)
        } else {
            Err(session_not_found(session.id()))
        }
    }
}
