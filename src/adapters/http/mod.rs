//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure. Paths
//! keep the trailing slashes existing clients already call.

pub mod error;
pub mod health;
pub mod participant;
pub mod session;
pub mod submission;

// Re-export key types for convenience
pub use error::{session_error_response, ErrorResponse};
pub use health::health_routes;
pub use participant::{participant_routes, ParticipantHandlers};
pub use session::{session_routes, SessionHandlers};
pub use submission::{submission_routes, SubmissionHandlers};
