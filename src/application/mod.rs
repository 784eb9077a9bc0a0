//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod session_locks;

pub use handlers::{
    // Participant handlers
    GetParticipantHandler, GetParticipantQuery,
    LoginCommand, LoginHandler,
    // Session handlers
    CloseSessionCommand, CloseSessionHandler, CloseSessionResult,
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult,
    GetSessionHandler, GetSessionQuery,
    ListSessionsHandler,
    // Submission handlers
    CheckSubmissionHandler, CheckSubmissionQuery, SubmissionStatus,
    ListSubmissionsHandler, ListSubmissionsQuery,
    SubmitRestaurantCommand, SubmitRestaurantHandler, SubmitRestaurantResult,
};
pub use session_locks::{SessionGuard, SessionLocks};
