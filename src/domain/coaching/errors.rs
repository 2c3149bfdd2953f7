//! Error types for the coaching domain.

use thiserror::Error;

/// Errors raised by coaching domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachingError {
    /// The submitted challenge was empty or whitespace-only.
    #[error("challenge must not be empty")]
    EmptyChallenge,

    /// A framework identifier did not match any known framework.
    #[error("unknown framework: {name}")]
    UnknownFramework {
        /// The identifier that failed to parse.
        name: String,
    },
}

impl CoachingError {
    /// Creates an unknown framework error.
    pub fn unknown_framework(name: impl Into<String>) -> Self {
        Self::UnknownFramework { name: name.into() }
    }
}
