//! Validated display names for participants, restaurants and sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum length for any entity name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// A trimmed, non-empty name of at most [`MAX_NAME_LENGTH`] characters.
///
/// Names are the natural keys of the directory and catalog, so two inputs
/// that differ only in surrounding whitespace resolve to the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Validates and normalizes a name for the given field.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long(field, MAX_NAME_LENGTH, length));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a name read back from the store.
    pub fn from_store(name: String) -> Self {
        Self(name)
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EntityName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EntityName::parse("name", &raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let name = EntityName::parse("username", "  alice ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn parse_rejects_blank() {
        let err = EntityName::parse("restaurant_name", "   ").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("restaurant_name"));
    }

    #[test]
    fn parse_rejects_overlong_names() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            EntityName::parse("name", &long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(EntityName::parse("name", &name).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<EntityName>("\"\"").is_err());
        let name: EntityName = serde_json::from_str("\" Sushi Bar \"").unwrap();
        assert_eq!(name.as_str(), "Sushi Bar");
    }
}
