//! PostgreSQL implementation of SessionReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ParticipantId, SessionId, Timestamp};
use crate::ports::{SessionReader, SessionView};

use super::rows::{column, expected_from_i32, progress_from_i16, status_from_str};

const VIEW_QUERY: &str = r#"
    SELECT s.id, s.name, s.status, s.expected_participants, s.progress,
           s.owner_id, p.name AS owner_name, r.name AS result_name,
           s.created_at, s.closed_at
    FROM sessions s
    JOIN participants p ON p.id = s.owner_id
    LEFT JOIN restaurants r ON r.id = s.result_id
"#;

#[derive(Clone)]
pub struct PostgresSessionReader {
    pool: PgPool,
}

impl PostgresSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_view(row: &PgRow) -> Result<SessionView, DomainError> {
    let status: String = column(row, "status")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let closed_at: Option<chrono::DateTime<chrono::Utc>> = column(row, "closed_at")?;

    Ok(SessionView {
        id: SessionId::from_store(column(row, "id")?),
        name: column(row, "name")?,
        status: status_from_str(&status)?,
        expected_participants: expected_from_i32(column(row, "expected_participants")?)?,
        progress: progress_from_i16(column(row, "progress")?)?,
        owner_id: ParticipantId::from_store(column(row, "owner_id")?),
        owner_name: column(row, "owner_name")?,
        result: column(row, "result_name")?,
        created_at: Timestamp::from_datetime(created_at),
        closed_at: closed_at.map(Timestamp::from_datetime),
    })
}

#[async_trait]
impl SessionReader for PostgresSessionReader {
    async fn get_view(&self, id: SessionId) -> Result<Option<SessionView>, DomainError> {
        let query = format!("{} WHERE s.id = $1", VIEW_QUERY);
        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session view", e))?;

        row.as_ref().map(row_to_view).transpose()
    }

    async fn list_views(&self) -> Result<Vec<SessionView>, DomainError> {
        let query = format!("{} ORDER BY s.id", VIEW_QUERY);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.iter().map(row_to_view).collect()
    }
}
