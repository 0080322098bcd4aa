//! The text-generation seam.

use async_trait::async_trait;

/// Errors from a narrative text provider. Callers convert these to
/// fallback strings; they never cross the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    /// No provider is configured (missing API key).
    #[error("Narrative generation is not configured")]
    Disabled,

    /// Transport-level failure talking to the API.
    #[error("Narrative API request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("Narrative API returned status {0}")]
    Status(u16),
}

/// A source of generated narrative text.
///
/// Prompts are built by [`crate::summary`]; `temperature` tunes sampling
/// per call. An `Ok` result may be empty when the model returned no text.
#[async_trait]
pub trait InsightsProvider: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, InsightsError>;
}

/// Provider used when no API key is configured: every call fails with
/// [`InsightsError::Disabled`], so callers serve their fallback strings.
pub struct DisabledProvider;

#[async_trait]
impl InsightsProvider for DisabledProvider {
    async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, InsightsError> {
        Err(InsightsError::Disabled)
    }
}
