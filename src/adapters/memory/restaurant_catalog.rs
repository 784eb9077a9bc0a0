use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntityName, RestaurantId};
use crate::domain::restaurant::Restaurant;
use crate::ports::RestaurantCatalog;

use super::{key, InMemoryStore, Tables};

#[async_trait]
impl RestaurantCatalog for InMemoryStore {
    async fn resolve_or_create(&self, name: &EntityName) -> Result<Restaurant, DomainError> {
        let mut tables = self.tables.write().await;

        if let Some(id) = tables.restaurants_by_name.get(name.as_str()).copied() {
            if let Some(existing) = tables.restaurant(id) {
                return Ok(existing.clone());
            }
        }

        let id = RestaurantId::from_store(Tables::next_id(tables.restaurants.len()));
        let restaurant = Restaurant::reconstitute(id, name.clone());
        tables.restaurants.push(restaurant.clone());
        tables.restaurants_by_name.insert(key(name), id);
        Ok(restaurant)
    }

    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        Ok(self.tables.read().await.restaurant(id).cloned())
    }
}
