//! Assistant bridge: prompt assembly and the HTTP round-trip

mod client;
mod prompt;
mod traits;

pub use client::{AssistantError, OllamaClient, FAILURE_PREFIX};
pub use prompt::build_prompt;
pub use traits::AssistantClient;

#[cfg(test)]
pub use traits::MockAssistantClient;
