//! PostgreSQL implementation of RestaurantCatalog.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EntityName, RestaurantId};
use crate::domain::restaurant::Restaurant;
use crate::ports::RestaurantCatalog;

use super::rows::column;

#[derive(Clone)]
pub struct PostgresRestaurantCatalog {
    pool: PgPool,
}

impl PostgresRestaurantCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantCatalog for PostgresRestaurantCatalog {
    async fn resolve_or_create(&self, name: &EntityName) -> Result<Restaurant, DomainError> {
        let existing = sqlx::query("SELECT id FROM restaurants WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch restaurant", e))?;

        let row = match existing {
            Some(row) => row,
            None => sqlx::query(
                r#"
                INSERT INTO restaurants (name) VALUES ($1)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to upsert restaurant", e))?,
        };

        Ok(Restaurant::reconstitute(
            RestaurantId::from_store(column(&row, "id")?),
            name.clone(),
        ))
    }

    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM restaurants WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch restaurant", e))?;

        row.map(|row| {
            Ok(Restaurant::reconstitute(
                RestaurantId::from_store(column(&row, "id")?),
                EntityName::from_store(column(&row, "name")?),
            ))
        })
        .transpose()
    }
}
