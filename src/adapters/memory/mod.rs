//! In-memory adapters for every persistence port.
//!
//! Backs tests and local development (`storage.backend = "memory"`). All
//! four tables live behind one `RwLock`, so each port call is atomic just as
//! a single SQL statement would be. Not suitable for multi-server deployments.

mod participant_directory;
mod restaurant_catalog;
mod session_reader;
mod session_repository;
mod submission_ledger;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{EntityName, ParticipantId, RestaurantId, SessionId};
use crate::domain::participant::Participant;
use crate::domain::restaurant::Restaurant;
use crate::domain::session::Session;
use crate::domain::submission::Submission;

/// Shared in-memory store. Cloning shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

/// Rows keyed the way the relational schema indexes them.
#[derive(Debug, Default)]
struct Tables {
    participants: Vec<Participant>,
    participants_by_name: HashMap<String, ParticipantId>,
    restaurants: Vec<Restaurant>,
    restaurants_by_name: HashMap<String, RestaurantId>,
    sessions: Vec<Session>,
    submissions: Vec<Submission>,
}

impl Tables {
    fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id() == id)
    }

    fn session_index(&self, id: SessionId) -> Option<usize> {
        self.sessions.iter().position(|s| s.id() == id)
    }

    /// Next identifier for a table holding `len` rows. IDs start at 1.
    fn next_id(len: usize) -> i64 {
        len as i64 + 1
    }

    fn participant_name(&self, id: ParticipantId) -> String {
        self.participant(id)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }

    fn restaurant_name(&self, id: RestaurantId) -> Option<String> {
        self.restaurant(id).map(|r| r.name().to_string())
    }
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of participants in the directory.
    pub async fn participant_count(&self) -> usize {
        self.tables.read().await.participants.len()
    }

    /// Number of restaurants in the catalog.
    pub async fn restaurant_count(&self) -> usize {
        self.tables.read().await.restaurants.len()
    }
}

fn key(name: &EntityName) -> String {
    name.as_str().to_string()
}
