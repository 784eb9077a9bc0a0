//! PostgreSQL implementation of SubmissionLedger.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, ErrorCode, ParticipantId, RestaurantId, SessionId, SubmissionId, Timestamp,
};
use crate::domain::submission::{NewSubmission, Submission, SubmissionEntry};
use crate::ports::SubmissionLedger;

use super::rows::column;

const UNIQUE_SUBMISSION: &str = "submissions_one_per_participant";

#[derive(Clone)]
pub struct PostgresSubmissionLedger {
    pool: PgPool,
}

impl PostgresSubmissionLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_submission(row: &PgRow) -> Result<Submission, DomainError> {
    let submitted_at: chrono::DateTime<chrono::Utc> = column(row, "submitted_at")?;
    let new = NewSubmission {
        session_id: SessionId::from_store(column(row, "session_id")?),
        participant_id: ParticipantId::from_store(column(row, "participant_id")?),
        restaurant_id: RestaurantId::from_store(column(row, "restaurant_id")?),
        submitted_at: Timestamp::from_datetime(submitted_at),
    };
    Ok(Submission::recorded(
        SubmissionId::from_store(column(row, "id")?),
        new,
    ))
}

fn is_duplicate(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.constraint())
        .map_or(false, |constraint| constraint == UNIQUE_SUBMISSION)
}

#[async_trait]
impl SubmissionLedger for PostgresSubmissionLedger {
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO submissions (participant_id, session_id, restaurant_id, submitted_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(submission.participant_id.value())
        .bind(submission.session_id.value())
        .bind(submission.restaurant_id.value())
        .bind(submission.submitted_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_duplicate(&e) {
                DomainError::new(
                    ErrorCode::AlreadySubmitted,
                    format!(
                        "Participant {} already submitted to session {}",
                        submission.participant_id, submission.session_id
                    ),
                )
                .with_detail("session_id", submission.session_id.to_string())
            } else {
                DomainError::database("Failed to insert submission", e)
            }
        })?;

        Ok(Submission::recorded(
            SubmissionId::from_store(column(&row, "id")?),
            submission.clone(),
        ))
    }

    async fn list_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<Submission>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, participant_id, session_id, restaurant_id, submitted_at
            FROM submissions
            WHERE session_id = $1
            ORDER BY id
            "#,
        )
        .bind(session_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list submissions", e))?;

        rows.iter().map(row_to_submission).collect()
    }

    async fn count_for_session(&self, session_id: SessionId) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM submissions WHERE session_id = $1")
                .bind(session_id.value())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to count submissions", e))?;

        Ok(result.0.max(0) as u64)
    }

    async fn find_for_participant(
        &self,
        session_id: SessionId,
        participant_id: ParticipantId,
    ) -> Result<Option<Submission>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, participant_id, session_id, restaurant_id, submitted_at
            FROM submissions
            WHERE session_id = $1 AND participant_id = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(session_id.value())
        .bind(participant_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch submission", e))?;

        row.as_ref().map(row_to_submission).transpose()
    }

    async fn list_with_names(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<SubmissionEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT p.name AS participant_name, r.name AS restaurant_name
            FROM submissions s
            JOIN participants p ON p.id = s.participant_id
            JOIN restaurants r ON r.id = s.restaurant_id
            WHERE s.session_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(session_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list submission names", e))?;

        rows.iter()
            .map(|row| {
                Ok(SubmissionEntry {
                    participant_name: column(row, "participant_name")?,
                    restaurant_name: column(row, "restaurant_name")?,
                })
            })
            .collect()
    }
}
