//! Configuration error types

use thiserror::Error;

/// Failure to produce an [`AppConfig`](super::AppConfig) from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read RESTAURANT_ROULETTE settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Settings rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// A setting that parsed but cannot be used to start the service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("Cannot bind to '{0}'")]
    InvalidBindAddress(String),

    #[error("{field} must be between 1 and {max} seconds, got {value}")]
    InvalidTimeout {
        field: &'static str,
        max: u64,
        value: u64,
    },

    #[error("database.url must use postgres:// or postgresql://, got scheme '{0}'")]
    UnsupportedDatabaseScheme(String),

    #[error("database.max_connections must be between 1 and {max}, got {value}")]
    InvalidPoolSize { max: u32, value: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_the_setting() {
        let err = ValidationError::InvalidTimeout {
            field: "server.request_timeout_secs",
            max: 300,
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "server.request_timeout_secs must be between 1 and 300 seconds, got 0"
        );
    }

    #[test]
    fn validation_failures_convert_into_config_errors() {
        let err: ConfigError = ValidationError::MissingRequired("database.url").into();
        assert_eq!(err.to_string(), "Settings rejected: database.url must be set");
    }
}
