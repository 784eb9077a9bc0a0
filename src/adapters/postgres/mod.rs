//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresParticipantDirectory` - participants table, upsert by name
//! - `PostgresRestaurantCatalog` - restaurants table, upsert by name
//! - `PostgresSessionRepository` - session aggregate writes
//! - `PostgresSessionReader` - sessions joined with owner/result names
//! - `PostgresSubmissionLedger` - submissions table
//!
//! The schema lives in `migrations/` and is applied by [`run_migrations`].
//! Pools are built from `DatabaseConfig` by [`connect`].

mod participant_directory;
mod restaurant_catalog;
mod rows;
mod session_reader;
mod session_repository;
mod submission_ledger;

pub use participant_directory::PostgresParticipantDirectory;
pub use restaurant_catalog::PostgresRestaurantCatalog;
pub use session_reader::PostgresSessionReader;
pub use session_repository::PostgresSessionRepository;
pub use submission_ledger::PostgresSubmissionLedger;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Open a connection pool sized and timed by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to PostgreSQL", e))?;

    tracing::info!(
        max_connections = config.max_connections,
        "PostgreSQL pool ready"
    );
    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
