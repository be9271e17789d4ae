//! HoroscopeService — templated prompts in, markdown text out.

use std::sync::Arc;

use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::profile::BirthProfile;

use super::prompts::{ASTROLOGER_SYSTEM_PROMPT, daily_reading_prompt, question_prompt};

/// Shown whenever the provider call fails, whatever the cause. A best-effort
/// advisory feature gets one catch and one message — no retry, no error-code
/// distinction.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I had trouble connecting to the cosmic forces. Please try again.";

/// Generates horoscope text through an injected `LlmProvider`.
pub struct HoroscopeService {
    llm: Arc<dyn LlmProvider>,
}

impl HoroscopeService {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Today's reading for the given profile. Returns markdown as-is.
    pub async fn daily_reading(&self, profile: &BirthProfile) -> String {
        self.generate(daily_reading_prompt(profile)).await
    }

    /// Answer a free-text question, personalized with the profile's birth
    /// details. Returns markdown as-is.
    pub async fn ask(&self, profile: &BirthProfile, question: &str) -> String {
        self.generate(question_prompt(profile, question)).await
    }

    async fn generate(&self, prompt: String) -> String {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(ASTROLOGER_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ]);
        match self.llm.complete(request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!("Horoscope generation failed: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
