//! Restaurant domain module.
//!
//! The catalog is shared by every session: the same name always resolves to
//! the same restaurant, regardless of which session first submitted it.

use serde::Serialize;

use crate::domain::foundation::{EntityName, RestaurantId};

/// A restaurant that has been submitted at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    id: RestaurantId,
    name: EntityName,
}

impl Restaurant {
    /// Reconstitute a restaurant from persistence.
    pub fn reconstitute(id: RestaurantId, name: EntityName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }
}
