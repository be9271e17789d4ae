//! LLM integration.
//!
//! The service talks to Gemini's `generateContent` REST API through the
//! `LlmProvider` trait, so the horoscope layer never sees HTTP — and tests
//! can substitute a stub that never touches the network.

pub mod gemini;
pub mod provider;

pub use gemini::GeminiProvider;
pub use provider::{ChatMessage, CompletionRequest, CompletionResponse, LlmProvider, Role};

use std::sync::Arc;

use secrecy::SecretString;

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub model: String,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Arc<dyn LlmProvider> {
    tracing::info!("Using Gemini (model: {})", config.model);
    Arc::new(GeminiProvider::new(
        config.api_key.clone(),
        config.model.clone(),
    ))
}
