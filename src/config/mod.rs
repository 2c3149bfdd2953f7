//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `KOKORO_COMPASS` prefix and nested values use double
//! underscores as separators.
//!
//! The text-generation credential deliberately lives outside the prefixed
//! tree: it is resolved from an ordered list of recognized key names via
//! [`resolve_credential`], and its absence switches the application into
//! demo mode rather than failing.
//!
//! # Example
//!
//! ```no_run
//! use kokoro_compass::config::{resolve_credential, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let credential = resolve_credential();
//! println!(
//!     "Server on {}, {} mode",
//!     config.server.socket_addr(),
//!     if credential.is_some() { "live" } else { "demo" }
//! );
//! ```

mod ai;
mod error;
mod server;

pub use ai::{resolve_credential, AiConfig, CREDENTIAL_KEYS};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Kokoro Compass application.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Text-generation configuration (model, endpoint, demo delay)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `KOKORO_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KOKORO_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `KOKORO_COMPASS__AI__MODEL=gpt-4o-mini` -> `ai.model = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Every section has defaults, so an empty environment loads.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KOKORO_COMPASS")
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
    /// A missing credential is not a validation failure - it selects demo
    /// mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
