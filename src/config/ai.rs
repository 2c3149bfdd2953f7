//! Text-generation configuration and credential resolution

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Recognized credential key names, probed in order; first hit wins.
///
/// Both case variants of the same semantic name are accepted because
/// deployments differ in how the secret is exported.
pub const CREDENTIAL_KEYS: &[&str] = &["OPENAI_API_KEY", "openai_api_key"];

/// Resolves the text-generation credential from the process environment.
///
/// Probes [`CREDENTIAL_KEYS`] in sequence and returns the first present,
/// non-empty value. Returns `None` when no key is set - that is demo mode,
/// not an error. Read-only; the credential is never validated for shape.
pub fn resolve_credential() -> Option<String> {
    CREDENTIAL_KEYS
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
}

/// Text-generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Model identifier, fixed for the process lifetime
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Cosmetic delay applied on the demo path, in seconds
    #[serde(default = "default_demo_delay")]
    pub demo_delay_secs: u64,
}

impl AiConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the demo delay as a Duration
    pub fn demo_delay(&self) -> Duration {
        Duration::from_secs(self.demo_delay_secs)
    }

    /// Validate text-generation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.demo_delay_secs > 30 {
            return Err(ValidationError::InvalidDemoDelay);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            demo_delay_secs: default_demo_delay(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_demo_delay() -> u64 {
    3
}
