//! Strongly-typed identifier value objects.
//!
//! Identifiers are positive integers assigned by the store in insertion
//! order, so the first session created is `SessionId(1)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! store_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier, rejecting zero and negative values.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        format!("must be a positive integer, got {}", value),
                    ));
                }
                Ok(Self(value))
            }

            /// Wraps a value the store has already assigned.
            pub fn from_store(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<i64>().map_err(|_| {
                    ValidationError::invalid_format($field, format!("'{}' is not an integer", s))
                })?;
                Self::new(value)
            }
        }
    };
}

store_id!(
    /// Unique identifier for a group decision session.
    SessionId,
    "session_id"
);

store_id!(
    /// Unique identifier for a participant in the directory.
    ParticipantId,
    "participant_id"
);

store_id!(
    /// Unique identifier for a restaurant in the global catalog.
    RestaurantId,
    "restaurant_id"
);

store_id!(
    /// Unique identifier for a single submission fact.
    SubmissionId,
    "submission_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accepts_positive_values() {
        let id = SessionId::new(1).unwrap();
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn session_id_rejects_zero_and_negative() {
        assert!(SessionId::new(0).is_err());
        assert!(SessionId::new(-5).is_err());
    }

    #[test]
    fn participant_id_parses_from_string() {
        let id: ParticipantId = "42".parse().unwrap();
        assert_eq!(id, ParticipantId::from_store(42));
    }

    #[test]
    fn restaurant_id_rejects_non_numeric_string() {
        let result = "pizza".parse::<RestaurantId>();
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => {
                assert_eq!(field, "restaurant_id");
            }
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn ids_display_as_plain_integers() {
        assert_eq!(SubmissionId::from_store(7).to_string(), "7");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&SessionId::from_store(3)).unwrap();
        assert_eq!(json, "3");
        let id: SessionId = serde_json::from_str("9").unwrap();
        assert_eq!(id.value(), 9);
    }
}
