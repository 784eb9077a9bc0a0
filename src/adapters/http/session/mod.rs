//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CloseSessionResponse, CreateSessionRequest, CreateSessionResponse, SessionResponse,
    SessionWithOwnerResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
