//! Participant command and query handlers.

mod get_participant;
mod login;

pub use get_participant::{GetParticipantHandler, GetParticipantQuery};
pub use login::{LoginCommand, LoginHandler};
