//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RESTAURANT_ROULETTE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use restaurant_roulette::config::{AppConfig, ConfigError};
//!
//! fn listen_addr() -> Result<std::net::SocketAddr, ConfigError> {
//!     let config = AppConfig::load()?;
//!     config.validate()?;
//!     Ok(config.server.socket_addr()?)
//! }
//! ```

mod database;
mod error;
mod server;
mod sessions;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use sessions::SessionsConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Which store backs the ports
    #[serde(default)]
    pub storage: StorageConfig,

    /// Database configuration (PostgreSQL connection); required for the
    /// postgres backend only
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Session behavior knobs
    #[serde(default)]
    pub sessions: SessionsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RESTAURANT_ROULETTE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RESTAURANT_ROULETTE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RESTAURANT_ROULETTE__STORAGE__BACKEND=postgres` -> `storage.backend = postgres`
    /// - `RESTAURANT_ROULETTE__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RESTAURANT_ROULETTE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if self.storage.backend == StorageBackend::Postgres {
            self.database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "RESTAURANT_ROULETTE__SERVER__PORT",
        "RESTAURANT_ROULETTE__SERVER__ENVIRONMENT",
        "RESTAURANT_ROULETTE__STORAGE__BACKEND",
        "RESTAURANT_ROULETTE__DATABASE__URL",
        "RESTAURANT_ROULETTE__SESSIONS__AUTO_REGISTER_PARTICIPANTS",
        "RESTAURANT_ROULETTE__SESSIONS__RESOLUTION_SEED",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(!config.sessions.auto_register_participants);
        assert!(config.sessions.resolution_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_postgres_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RESTAURANT_ROULETTE__STORAGE__BACKEND", "postgres");
        env::set_var(
            "RESTAURANT_ROULETTE__DATABASE__URL",
            "postgresql://test@localhost/test",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgres_backend_requires_database_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RESTAURANT_ROULETTE__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_session_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "RESTAURANT_ROULETTE__SESSIONS__AUTO_REGISTER_PARTICIPANTS",
            "true",
        );
        env::set_var("RESTAURANT_ROULETTE__SESSIONS__RESOLUTION_SEED", "42");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.sessions.auto_register_participants);
        assert_eq!(config.sessions.resolution_seed, Some(42));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RESTAURANT_ROULETTE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RESTAURANT_ROULETTE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }
}
