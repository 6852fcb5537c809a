//! WaveSpeed any-llm provider implementation
//!
//! This module implements the TextGenerator trait against WaveSpeed's
//! any-llm endpoint, which proxies a configurable upstream model behind a
//! single synchronous completion API.

use crate::{LlmError, Result, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const WAVESPEED_API_URL: &str = "https://api.wavespeed.ai/api/v3/wavespeed-ai/any-llm";

/// Default upstream model routed through any-llm
pub const DEFAULT_MODEL: &str = "anthropic/claude-3.7-sonnet";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// WaveSpeed any-llm provider
pub struct WaveSpeedProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl WaveSpeedProvider {
    /// Create a new WaveSpeed provider
    ///
    /// # Arguments
    ///
    /// * `api_key` - WaveSpeed API key
    /// * `model` - Upstream model identifier (e.g., "anthropic/claude-3.7-sonnet")
    /// * `timeout` - Per-request timeout, bounding every generation call
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Create a provider from environment variables
    ///
    /// Reads the API key from `WAVESPEED_API_KEY` and uses the default
    /// model and timeout.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("WAVESPEED_API_KEY").map_err(|_| {
            LlmError::ConfigurationError(
                "WAVESPEED_API_KEY environment variable not set".to_string(),
            )
        })?;
        Self::new(api_key, DEFAULT_MODEL, DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl TextGenerator for WaveSpeedProvider {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Sending request to WaveSpeed any-llm API");

        let request = WaveSpeedRequest {
            enable_sync_mode: true,
            model: &self.model,
            priority: "latency",
            prompt,
            reasoning: false,
        };

        let response = self
            .client
            .post(WAVESPEED_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimitExceeded(error_text),
                400 => LlmError::InvalidRequest(error_text),
                _ => LlmError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let envelope: WaveSpeedResponse = response.json().await.map_err(|e| {
            LlmError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        envelope.into_output()
    }

    fn name(&self) -> &'static str {
        "wavespeed"
    }
}

// WaveSpeed-specific request/response types
// These match the any-llm API format exactly

#[derive(Debug, Serialize)]
struct WaveSpeedRequest<'a> {
    enable_sync_mode: bool,
    model: &'a str,
    priority: &'a str,
    prompt: &'a str,
    reasoning: bool,
}

#[derive(Debug, Deserialize)]
struct WaveSpeedResponse {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<WaveSpeedData>,
}

#[derive(Debug, Deserialize)]
struct WaveSpeedData {
    #[serde(default)]
    outputs: Vec<String>,
}

impl WaveSpeedResponse {
    /// Extract the first output text, or a service-reported error
    fn into_output(self) -> Result<String> {
        if self.code == 200 {
            if let Some(output) = self.data.and_then(|d| d.outputs.into_iter().next()) {
                return Ok(output);
            }
        }

        Err(LlmError::ProviderError(
            self.message.unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}
