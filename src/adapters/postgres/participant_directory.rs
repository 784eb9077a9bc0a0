//! PostgreSQL implementation of ParticipantDirectory.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EntityName, ParticipantId};
use crate::domain::participant::Participant;
use crate::ports::ParticipantDirectory;

use super::rows::column;

#[derive(Clone)]
pub struct PostgresParticipantDirectory {
    pool: PgPool,
}

impl PostgresParticipantDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantDirectory for PostgresParticipantDirectory {
    async fn resolve_or_create(&self, name: &EntityName) -> Result<Participant, DomainError> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        // The no-op update makes RETURNING yield the row a concurrent
        // inserter won the race with.
        let row = sqlx::query(
            r#"
            INSERT INTO participants (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert participant", e))?;

        let id: i64 = column(&row, "id")?;
        tracing::debug!(participant_id = id, participant = %name, "Registered participant");
        Ok(Participant::reconstitute(
            ParticipantId::from_store(id),
            name.clone(),
        ))
    }

    async fn find_by_name(&self, name: &EntityName) -> Result<Option<Participant>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM participants WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch participant", e))?;

        row.map(|row| {
            Ok(Participant::reconstitute(
                ParticipantId::from_store(column(&row, "id")?),
                EntityName::from_store(column(&row, "name")?),
            ))
        })
        .transpose()
    }
}
