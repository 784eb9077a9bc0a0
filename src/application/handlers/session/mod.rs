//! Session command and query handlers.

mod close_session;
mod create_session;
mod get_session;
mod list_sessions;

pub use close_session::{CloseSessionCommand, CloseSessionHandler, CloseSessionResult};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_sessions::ListSessionsHandler;
