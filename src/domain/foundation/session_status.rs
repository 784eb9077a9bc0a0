//! SessionStatus enum for tracking lifecycle of group decision sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{StateMachine, ValidationError};

/// Lifecycle status of a group decision session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Open,
    Closed,
}

impl SessionStatus {
    /// Returns true if the session still accepts submissions.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, SessionStatus::Open)
    }

    /// Storage representation, also used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Open => "open",
            SessionStatus::Closed => "closed",
        }
    }
}

impl StateMachine for SessionStatus {
    /// Valid transitions:
    /// - Open -> Closed
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Open, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SessionStatus::Open => vec![SessionStatus::Closed],
            SessionStatus::Closed => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Open => "Open",
            SessionStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SessionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(SessionStatus::Open),
            "closed" => Ok(SessionStatus::Closed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown session status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(SessionStatus::default(), SessionStatus::Open);
    }

    #[test]
    fn only_open_accepts_submissions() {
        assert!(SessionStatus::Open.accepts_submissions());
        assert!(!SessionStatus::Closed.accepts_submissions());
    }

    #[test]
    fn open_can_transition_to_closed() {
        assert!(SessionStatus::Open.can_transition_to(&SessionStatus::Closed));
    }

    #[test]
    fn closed_is_terminal() {
        assert!(SessionStatus::Closed.is_terminal());
        assert!(!SessionStatus::Closed.can_transition_to(&SessionStatus::Open));
        assert!(SessionStatus::Closed
            .transition_to(SessionStatus::Closed)
            .is_err());
    }

    #[test]
    fn parses_storage_representation() {
        assert_eq!("open".parse::<SessionStatus>().unwrap(), SessionStatus::Open);
        assert_eq!(
            "closed".parse::<SessionStatus>().unwrap(),
            SessionStatus::Closed
        );
        assert!("archived".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Closed).unwrap(),
            "\"closed\""
        );
    }
}
