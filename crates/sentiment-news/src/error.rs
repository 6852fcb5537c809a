//! Error types for news-fetching operations

use thiserror::Error;

/// Result type alias for news operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// News fetching specific errors
#[derive(Debug, Error)]
pub enum NewsError {
    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
