//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes, DTOs and error mapping
//! - `memory` - process-local tables for tests and local runs
//! - `postgres` - sqlx implementations of every persistence port

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
