//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the session domain.

mod command;
mod errors;
mod ids;
mod name;
mod percentage;
mod session_status;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ParticipantId, RestaurantId, SessionId, SubmissionId};
pub use name::{EntityName, MAX_NAME_LENGTH};
pub use percentage::Percentage;
pub use session_status::SessionStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
