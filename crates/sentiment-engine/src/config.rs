//! Configuration for sentiment analysis runs

use crate::aggregate::AggregatorConfig;
use sentiment_llm::providers::wavespeed;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation error
#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(String);

/// Configuration for a sentiment analysis run
///
/// Everything the orchestrator needs to wire the collaborators together:
/// the model routed through the text-generation service, the per-call
/// timeout, the news window, and the aggregation constants. No ambient
/// globals; substitute thresholds freely in tests.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upstream model identifier for the text-generation service
    pub model: String,

    /// Timeout bounding each generation call
    pub request_timeout: Duration,

    /// Number of news articles fetched per stock
    pub news_limit: usize,

    /// News lookback window in days
    pub lookback_days: i64,

    /// Aggregation thresholds and weight floor
    pub aggregator: AggregatorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: wavespeed::DEFAULT_MODEL.to_string(),
            request_timeout: wavespeed::DEFAULT_TIMEOUT,
            news_limit: 10,
            lookback_days: 3,
            aggregator: AggregatorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.news_limit == 0 {
            return Err(ConfigError("news_limit must be greater than 0".to_string()));
        }

        if self.lookback_days <= 0 {
            return Err(ConfigError(
                "lookback_days must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError(
                "request_timeout must be greater than zero".to_string(),
            ));
        }

        if self.aggregator.bullish_threshold <= self.aggregator.bearish_threshold {
            return Err(ConfigError(
                "bullish_threshold must be above bearish_threshold".to_string(),
            ));
        }

        if self.aggregator.zero_confidence_weight <= 0.0 {
            return Err(ConfigError(
                "zero_confidence_weight must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    model: Option<String>,
    request_timeout: Option<Duration>,
    news_limit: Option<usize>,
    lookback_days: Option<i64>,
    aggregator: Option<AggregatorConfig>,
}

impl EngineConfigBuilder {
    /// Set the upstream model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the per-call generation timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the number of articles fetched per stock
    pub fn news_limit(mut self, limit: usize) -> Self {
        self.news_limit = Some(limit);
        self
    }

    /// Set the news lookback window in days
    pub fn lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = Some(days);
        self
    }

    /// Set the aggregation constants
    pub fn aggregator(mut self, config: AggregatorConfig) -> Self {
        self.aggregator = Some(config);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            model: self.model.unwrap_or(defaults.model),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            news_limit: self.news_limit.unwrap_or(defaults.news_limit),
            lookback_days: self.lookback_days.unwrap_or(defaults.lookback_days),
            aggregator: self.aggregator.unwrap_or(defaults.aggregator),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.news_limit, 10);
        assert_eq!(config.lookback_days, 3);
        assert_eq!(config.aggregator.bullish_threshold, 60.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::builder()
            .model("anthropic/claude-3.7-sonnet")
            .news_limit(5)
            .lookback_days(7)
            .request_timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(config.news_limit, 5);
        assert_eq!(config.lookback_days, 7);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_validation_rejects_inverted_thresholds() {
        let result = EngineConfig::builder()
            .aggregator(AggregatorConfig {
                bullish_threshold: 40.0,
                bearish_threshold: 60.0,
                zero_confidence_weight: 0.5,
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_news_limit() {
        assert!(EngineConfig::builder().news_limit(0).build().is_err());
    }
}
