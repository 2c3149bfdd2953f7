//! GenerateConsultationHandler - produces a consultation for a submitted
//! challenge.
//!
//! This is the only decision point in the system: without a configured
//! provider the deterministic demo template is returned; with one, the
//! system instruction plus the raw user text go to the text-generation
//! call. Any provider failure is caught here and converted into the fixed
//! placeholder - nothing past this boundary ever sees the error.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::coaching::{templates, Challenge, Consultation, Framework};
use crate::ports::{AIProvider, CompletionRequest, MessageRole};

/// Command to generate a consultation.
#[derive(Debug, Clone)]
pub struct GenerateConsultationCommand {
    /// The framework selected at submit time.
    pub framework: Framework,
    /// The validated challenge text.
    pub challenge: Challenge,
}

/// Handler for generating consultations.
pub struct GenerateConsultationHandler {
    /// Configured provider; `None` selects the demo path.
    provider: Option<Arc<dyn AIProvider>>,
    /// Cosmetic delay applied on the demo path.
    demo_delay: Duration,
}

impl GenerateConsultationHandler {
    pub fn new(provider: Option<Arc<dyn AIProvider>>, demo_delay: Duration) -> Self {
        Self {
            provider,
            demo_delay,
        }
    }

    /// True when a provider is configured (live mode).
    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    /// Produces a consultation for the command.
    ///
    /// Infallible: the command carries a validated challenge, the demo path
    /// always succeeds, and live-path failures degrade to the placeholder.
    /// Exactly one of demo / live / error comes back, never an empty body.
    pub async fn handle(&self, cmd: GenerateConsultationCommand) -> Consultation {
        match &self.provider {
            None => self.generate_demo(cmd.framework).await,
            Some(provider) => self.generate_live(provider.as_ref(), &cmd).await,
        }
    }

    async fn generate_demo(&self, framework: Framework) -> Consultation {
        // Simulated analysis latency; zero in tests
        if !self.demo_delay.is_zero() {
            tokio::time::sleep(self.demo_delay).await;
        }

        tracing::debug!(framework = %framework, "serving demo consultation");
        Consultation::demo(templates::demo_consultation(framework))
    }

    async fn generate_live(
        &self,
        provider: &dyn AIProvider,
        cmd: &GenerateConsultationCommand,
    ) -> Consultation {
        let request = CompletionRequest::new()
            .with_system_prompt(templates::system_instruction(cmd.framework))
            .with_message(MessageRole::User, cmd.challenge.as_str());

        match provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    framework = %cmd.framework,
                    model = %response.model,
                    "live consultation generated"
                );
                Consultation::live(response.content)
            }
            Err(err) => {
                tracing::error!(
                    framework = %cmd.framework,
                    error = %err,
                    "text-generation call failed, serving placeholder"
                );
                Consultation::error_placeholder()
            }
        }
    }
}
