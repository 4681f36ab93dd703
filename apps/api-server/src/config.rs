//! Application configuration loaded from environment variables.

use std::env;

/// Moderator capability configuration.
///
/// Without a configured passphrase hash the moderator surface stays
/// closed: login answers 503 and no token can ever be issued.
#[derive(Debug, Clone)]
pub struct ModeratorConfig {
    pub passphrase_hash: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub moderator: ModeratorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let passphrase_hash = env::var("MODERATOR_PASSPHRASE_HASH").ok();
        if passphrase_hash.is_none() {
            tracing::warn!(
                "MODERATOR_PASSPHRASE_HASH not set. The moderator surface is disabled."
            );
        }

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            moderator: ModeratorConfig { passphrase_hash },
        }
    }
}
