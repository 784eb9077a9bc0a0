//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `participant` - Directory entries for people taking part in sessions
//! - `restaurant` - Global restaurant catalog entries
//! - `session` - Group decision session lifecycle
//! - `submission` - Restaurant choices recorded against a session
//! - `resolution` - Random draw of a session's result

pub mod foundation;
pub mod participant;
pub mod resolution;
pub mod restaurant;
pub mod session;
pub mod submission;
