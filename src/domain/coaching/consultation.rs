//! Consultation value objects: the validated challenge text and the
//! generated consultation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CoachingError;
use super::templates;

/// A validated, non-empty management challenge description.
///
/// Construction is the single checkpoint for the non-empty precondition:
/// once a `Challenge` exists, the generator never sees blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge(String);

impl Challenge {
    /// Creates a challenge from user input.
    ///
    /// The input is trimmed; empty or whitespace-only input is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, CoachingError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoachingError::EmptyChallenge);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the challenge text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a consultation body was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    /// Deterministic fallback, no credential configured.
    Demo,
    /// Generated by the external text-generation call.
    Live,
    /// The external call failed; the body is the fixed placeholder.
    Error,
}

/// The generated consultation: a Markdown body plus how it was produced.
///
/// A consultation always has a non-empty body; the `error` constructor
/// installs the fixed placeholder so rendering never deals with a missing
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    /// Markdown-formatted consultation text.
    pub body: String,
    /// How the body was produced.
    pub status: ConsultationStatus,
}

impl Consultation {
    /// Creates a demo-mode consultation.
    pub fn demo(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: ConsultationStatus::Demo,
        }
    }

    /// Creates a live consultation carrying the provider's text verbatim.
    pub fn live(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: ConsultationStatus::Live,
        }
    }

    /// Creates the error-placeholder consultation.
    pub fn error_placeholder() -> Self {
        Self {
            body: templates::CONSULTATION_UNAVAILABLE.to_string(),
            status: ConsultationStatus::Error,
        }
    }
}
