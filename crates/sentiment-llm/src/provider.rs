//! Text-generation provider trait definition

use crate::Result;
use async_trait::async_trait;

/// Trait for text-generation services
///
/// Implementations turn a prompt string into a generated text payload.
/// The payload may be wrapped in a fenced code block; unwrapping is the
/// caller's responsibility.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a text completion for the given prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt to send to the service
    ///
    /// # Returns
    ///
    /// The raw text payload produced by the model
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name (e.g., "wavespeed")
    fn name(&self) -> &str;
}
