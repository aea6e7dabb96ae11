//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `CHANGEMAKER__<SECTION>__<KEY>` pattern

mod engine;
mod server;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use engine::EngineConfig;
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Change engine policy configuration.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{CHANGEMAKER_PROFILE}.toml` (if `CHANGEMAKER_PROFILE` is set)
    /// 3. Environment variables with `CHANGEMAKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Determine profile
        let profile =
            std::env::var("CHANGEMAKER_PROFILE").unwrap_or_else(|_| "development".to_string());

        // Build configuration
        let config = Config::builder()
            // Load default configuration
            .add_source(File::with_name("config/default").required(false))
            // Load profile-specific configuration
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // Override with environment variables
            // CHANGEMAKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("CHANGEMAKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Deserialize and validate
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        // Validate server config
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        // Validate engine config
        self.engine.validate()?;

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
