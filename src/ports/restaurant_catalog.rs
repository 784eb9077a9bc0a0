//! Restaurant catalog port.
//!
//! Global across sessions: restaurant names are deduplicated everywhere.

use crate::domain::foundation::{DomainError, EntityName, RestaurantId};
use crate::domain::restaurant::Restaurant;
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantCatalog: Send + Sync {
    /// Look up a restaurant by name, creating it on first sight.
    async fn resolve_or_create(&self, name: &EntityName) -> Result<Restaurant, DomainError>;

    /// Look up a restaurant by ID.
    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn RestaurantCatalog) {}
    }
}
