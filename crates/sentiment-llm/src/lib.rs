//! Text-generation abstraction for sentiment analysis
//!
//! This crate provides a provider-agnostic seam for invoking a Large
//! Language Model with a plain prompt string. It includes:
//!
//! - The `TextGenerator` trait consumed by the analyzer
//! - The `LlmError` taxonomy for generation failures
//! - A concrete WaveSpeed any-llm provider implementation

pub mod error;
pub mod provider;
pub mod providers;

// Re-export main types
pub use error::{LlmError, Result};
pub use provider::TextGenerator;
pub use providers::WaveSpeedProvider;
