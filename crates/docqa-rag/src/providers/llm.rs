//! LLM provider trait for generating answers

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based answer generation
///
/// The caller assembles the full prompt; implementations only carry it
/// to a model and hand back the generated text. Tests substitute a mock.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate an answer for a fully-assembled prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model being used
    fn model(&self) -> &str;
}
