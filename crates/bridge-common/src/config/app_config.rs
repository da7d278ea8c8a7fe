//! Application configuration structs
//!
//! Loads configuration from environment variables. The chat credentials and
//! the webhook secret are required; everything else has a default.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub matrix: MatrixSettings,
    pub webhook: WebhookSettings,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Matrix homeserver settings for outbound delivery
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixSettings {
    /// Base URL of the homeserver, e.g. `https://matrix.example.org`
    pub homeserver: String,
    /// Access token of the bridge user
    pub access_token: String,
    /// Upper bound on a single send call
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

/// Inbound webhook settings
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookSettings {
    /// Shared secret scoping the webhook paths
    pub secret: String,
}

// Default value functions
fn default_app_name() -> String {
    "hookbridge".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_send_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or carry unparseable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("WEBHOOK_HOST").unwrap_or_else(|_| default_host()),
                port: match env::var("WEBHOOK_PORT") {
                    Ok(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("WEBHOOK_PORT", s))?,
                    Err(_) => default_port(),
                },
            },
            matrix: MatrixSettings {
                homeserver: env::var("MATRIX_HOMESERVER")
                    .map_err(|_| ConfigError::MissingVar("MATRIX_HOMESERVER"))?,
                access_token: env::var("MATRIX_ACCESS_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("MATRIX_ACCESS_TOKEN"))?,
                send_timeout_secs: match env::var("MATRIX_SEND_TIMEOUT_SECS") {
                    Ok(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("MATRIX_SEND_TIMEOUT_SECS", s))?,
                    Err(_) => default_send_timeout_secs(),
                },
            },
            webhook: WebhookSettings {
                secret: env::var("WEBHOOK_SECRET")
                    .map_err(|_| ConfigError::MissingVar("WEBHOOK_SECRET"))?,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
