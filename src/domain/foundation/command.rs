//! Command infrastructure for application handlers.
//!
//! `CommandMetadata` carries request context through command processing so
//! handlers can tag their log lines with a stable correlation id instead of
//! each accepting loose `correlation_id`/`source` parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
///
/// Authentication is out of scope, so unlike a typical request context this
/// carries no caller identity; participants are named in the commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links log lines belonging to a single request.
    correlation_id: String,

    /// Source of this command (e.g., "http", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata with a freshly generated correlation id.
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            source: None,
        }
    }

    /// Builder: Use an externally supplied correlation id.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation id.
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Default for CommandMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with a fixed correlation id.
    pub fn test_fixture() -> Self {
        Self::new()
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_distinct_correlation_ids() {
        let a = CommandMetadata::new();
        let b = CommandMetadata::new();
        assert!(!a.correlation_id().is_empty());
        assert_ne!(a.correlation_id(), b.correlation_id());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new()
            .with_correlation_id("corr-123")
            .with_source("http");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn serialization_skips_missing_source() {
        let metadata = CommandMetadata::new().with_correlation_id("c");
        let json = serde_json::to_string(&metadata).unwrap();

        assert!(json.contains("correlation_id"));
        assert!(!json.contains("source"));
    }

    #[test]
    fn test_fixture_creates_valid_metadata() {
        let metadata = CommandMetadata::test_fixture();
        assert_eq!(metadata.correlation_id(), "test-correlation-id");
        assert_eq!(metadata.source(), Some("test"));
    }
}
