//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAiProvider` - Configurable mock for testing
//! - `OpenAiProvider` - OpenAI chat-completions client

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAiProvider, MockError, MockResponse};
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
