//! Trait abstraction for the assistant client to enable mocking in tests

use super::client::{AssistantError, OllamaClient};
use super::prompt::build_prompt;
use async_trait::async_trait;

/// Trait for assistant operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Ask the assistant a question about one section, with the session's
    /// reference text as context. Failure is a typed error; conversion to
    /// display text happens at the UI boundary.
    async fn ask(
        &self,
        section_id: &str,
        reference_text: &str,
        question: &str,
    ) -> Result<String, AssistantError>;
}

#[async_trait]
impl AssistantClient for OllamaClient {
    async fn ask(
        &self,
        section_id: &str,
        reference_text: &str,
        question: &str,
    ) -> Result<String, AssistantError> {
        let prompt = build_prompt(section_id, reference_text, question);
        self.generate(&prompt).await
    }
}
