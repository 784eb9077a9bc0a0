//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ParticipantDirectory` - name -> participant lookup-or-create
//! - `RestaurantCatalog` - name -> restaurant lookup-or-create, global
//! - `SessionRepository` - session aggregate persistence (write side)
//! - `SessionReader` - joined session views (read side)
//! - `SubmissionLedger` - submission facts and progress counts

mod participant_directory;
mod restaurant_catalog;
mod session_reader;
mod session_repository;
mod submission_ledger;

pub use participant_directory::ParticipantDirectory;
pub use restaurant_catalog::RestaurantCatalog;
pub use session_reader::{SessionReader, SessionView};
pub use session_repository::SessionRepository;
pub use submission_ledger::SubmissionLedger;
