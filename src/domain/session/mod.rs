//! Session domain module.
//!
//! Handles the group decision lifecycle: a session is created open, collects
//! submissions while progress is tracked, and is closed exactly once by
//! drawing one submission as its result.

mod aggregate;
mod errors;

pub use aggregate::{NewSession, Session};
pub use errors::SessionError;
