//! Row decoding helpers shared by the PostgreSQL adapters.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{
    DomainError, EntityName, ErrorCode, ParticipantId, Percentage, RestaurantId, SessionId,
    SessionStatus, Timestamp,
};
use crate::domain::session::Session;

/// Read a column, mapping decode failures to `DatabaseError`.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) fn status_from_str(raw: &str) -> Result<SessionStatus, DomainError> {
    raw.parse::<SessionStatus>().map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", e),
        )
    })
}

pub(super) fn expected_from_i32(raw: i32) -> Result<u32, DomainError> {
    u32::try_from(raw).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid expected_participants: {}", raw),
        )
    })
}

pub(super) fn progress_from_i16(raw: i16) -> Result<Percentage, DomainError> {
    u8::try_from(raw)
        .ok()
        .and_then(|value| Percentage::try_new(value).ok())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid progress: {}", raw),
            )
        })
}

/// Columns selected for a session aggregate.
pub(super) const SESSION_COLUMNS: &str = "s.id, s.name, s.status, s.expected_participants, \
     s.progress, s.owner_id, s.result_id, s.created_at, s.closed_at";

pub(super) fn row_to_session(row: &PgRow) -> Result<Session, DomainError> {
    let status: String = column(row, "status")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let closed_at: Option<chrono::DateTime<chrono::Utc>> = column(row, "closed_at")?;
    let result_id: Option<i64> = column(row, "result_id")?;

    Ok(Session::reconstitute(
        SessionId::from_store(column(row, "id")?),
        EntityName::from_store(column(row, "name")?),
        ParticipantId::from_store(column(row, "owner_id")?),
        status_from_str(&status)?,
        expected_from_i32(column(row, "expected_participants")?)?,
        progress_from_i16(column(row, "progress")?)?,
        result_id.map(RestaurantId::from_store),
        Timestamp::from_datetime(created_at),
        closed_at.map(Timestamp::from_datetime),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_conversion_roundtrips() {
        for status in [SessionStatus::Open, SessionStatus::Closed] {
            assert_eq!(status_from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_from_str_rejects_invalid() {
        assert!(status_from_str("archived").is_err());
    }

    #[test]
    fn expected_participants_rejects_negative() {
        assert!(expected_from_i32(-1).is_err());
        assert_eq!(expected_from_i32(4).unwrap(), 4);
    }

    #[test]
    fn progress_rejects_out_of_range() {
        assert!(progress_from_i16(101).is_err());
        assert!(progress_from_i16(-3).is_err());
        assert_eq!(progress_from_i16(50).unwrap().value(), 50);
    }
}
