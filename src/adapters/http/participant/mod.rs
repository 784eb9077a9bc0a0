//! HTTP adapter for participant endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, LoginResponse, ParticipantResponse};
pub use handlers::ParticipantHandlers;
pub use routes::participant_routes;
