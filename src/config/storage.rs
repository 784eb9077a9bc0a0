//! Storage backend selection

use serde::Deserialize;

/// Which implementation backs the persistence ports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local tables; state is lost on restart
    #[default]
    Memory,
    /// PostgreSQL via sqlx; needs `database.url`
    Postgres,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults_to_memory() {
        assert_eq!(StorageConfig::default().backend, StorageBackend::Memory);
    }

    #[test]
    fn test_backend_deserializes_lowercase() {
        let config: StorageConfig = serde_json::from_str(r#"{"backend":"postgres"}"#).unwrap();
        assert_eq!(config.backend, StorageBackend::Postgres);
    }
}
