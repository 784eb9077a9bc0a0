//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod participant;
pub mod session;
pub mod submission;

pub use participant::{GetParticipantHandler, GetParticipantQuery, LoginCommand, LoginHandler};
pub use session::{
    CloseSessionCommand, CloseSessionHandler, CloseSessionResult, CreateSessionCommand,
    CreateSessionHandler, CreateSessionResult, GetSessionHandler, GetSessionQuery,
    ListSessionsHandler,
};
pub use submission::{
    CheckSubmissionHandler, CheckSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    SubmissionStatus, SubmitRestaurantCommand, SubmitRestaurantHandler, SubmitRestaurantResult,
};
