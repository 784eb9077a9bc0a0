//! Session behavior configuration

use serde::Deserialize;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsConfig {
    /// Register unknown participant names on submission; off by default, so
    /// unknown submitters get a 404
    #[serde(default = "default_auto_register")]
    pub auto_register_participants: bool,

    /// Fixed seed for result draws; entropy-seeded when unset
    #[serde(default)]
    pub resolution_seed: Option<u64>,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            auto_register_participants: default_auto_register(),
            resolution_seed: None,
        }
    }
}

fn default_auto_register() -> bool {
    false
}
