//! Polygon.io client for stock reference news

use crate::error::{NewsError, Result};
use crate::source::NewsSource;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use sentiment_core::NewsItem;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

const POLYGON_BASE_URL: &str = "https://api.polygon.io";

/// Polygon.io reference-news response envelope
#[derive(Debug, Deserialize)]
struct PolygonNewsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    results: Option<Vec<PolygonArticle>>,
}

/// One article as returned by /v2/reference/news
#[derive(Debug, Deserialize)]
struct PolygonArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    published_utc: String,
    #[serde(default)]
    article_url: String,
    #[serde(default)]
    publisher: Option<PolygonPublisher>,
}

#[derive(Debug, Deserialize)]
struct PolygonPublisher {
    #[serde(default)]
    name: String,
}

impl PolygonArticle {
    fn into_news_item(self, ticker: &str) -> NewsItem {
        let source = match self.publisher {
            Some(publisher) if !publisher.name.is_empty() => publisher.name,
            _ => "Unknown".to_string(),
        };

        NewsItem {
            ticker: ticker.to_string(),
            title: self.title,
            description: self.description,
            author: self.author.unwrap_or_else(|| "Unknown".to_string()),
            published_utc: self.published_utc,
            article_url: self.article_url,
            source,
        }
    }
}

/// Polygon.io client for the reference-news API
pub struct PolygonClient {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: SharedRateLimiter,
}

impl PolygonClient {
    /// Create a new Polygon client with rate limiting
    ///
    /// # Arguments
    /// * `api_key` - Polygon API key
    /// * `rate_limit` - Requests per minute (free tier: 5)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(5).unwrap()));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: POLYGON_BASE_URL.to_string(),
            rate_limiter,
        }
    }

    /// Create a client from the `POLYGON_API_KEY` environment variable
    pub fn from_env(rate_limit: u32) -> Result<Self> {
        let api_key = std::env::var("POLYGON_API_KEY").map_err(|_| {
            NewsError::ConfigError("POLYGON_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key, rate_limit))
    }

    /// Get recent news for a ticker, newest first
    ///
    /// Items missing a title or description are dropped; they cannot be
    /// analyzed downstream.
    ///
    /// # Arguments
    /// * `ticker` - Stock ticker symbol (e.g., "AAPL")
    /// * `limit` - Maximum number of articles
    /// * `days_back` - Lookback window in days
    pub async fn ticker_news(
        &self,
        ticker: &str,
        limit: usize,
        days_back: i64,
    ) -> Result<Vec<NewsItem>> {
        self.rate_limiter.until_ready().await;

        let end_date = Utc::now();
        let start_date = end_date - ChronoDuration::days(days_back);

        let url = format!("{}/v2/reference/news", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ticker", ticker),
                ("published_utc.gte", &start_date.format("%Y-%m-%d").to_string()),
                ("published_utc.lte", &end_date.format("%Y-%m-%d").to_string()),
                ("limit", &limit.to_string()),
                ("sort", "published_utc"),
                ("order", "desc"),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| NewsError::ApiError(format!("Polygon request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError(format!(
                "Polygon API error {status}: {body}"
            )));
        }

        let envelope = response
            .json::<PolygonNewsResponse>()
            .await
            .map_err(|e| NewsError::ApiError(format!("Failed to parse Polygon response: {e}")))?;

        match envelope.results {
            Some(results) => {
                let items: Vec<NewsItem> = results
                    .into_iter()
                    .map(|article| article.into_news_item(ticker))
                    .filter(NewsItem::is_analyzable)
                    .collect();
                debug!(ticker, count = items.len(), "Fetched ticker news");
                Ok(items)
            }
            None => Err(NewsError::ApiError(format!(
                "Polygon returned no results, status: {}",
                envelope.status.unwrap_or_default()
            ))),
        }
    }
}

#[async_trait]
impl NewsSource for PolygonClient {
    async fn recent_news(&self, ticker: &str, limit: usize, days_back: i64) -> Vec<NewsItem> {
        match self.ticker_news(ticker, limit, days_back).await {
            Ok(items) => items,
            Err(e) => {
                warn!(ticker, error = %e, "News fetch failed, returning no articles");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "polygon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "status": "OK",
        "count": 3,
        "results": [
            {
                "title": "Apple Reports Record iPhone Sales",
                "description": "Sales exceeded expectations by 15%.",
                "author": "Jane Doe",
                "published_utc": "2026-02-05T10:00:00Z",
                "article_url": "https://example.com/a",
                "publisher": {"name": "Reuters"}
            },
            {
                "title": "Headline without summary",
                "description": "",
                "published_utc": "2026-02-04T10:00:00Z",
                "article_url": "https://example.com/b",
                "publisher": {"name": "Bloomberg"}
            },
            {
                "title": "Supply Chain Challenges",
                "description": "Production delays at major facilities.",
                "published_utc": "2026-02-03T10:00:00Z",
                "article_url": "https://example.com/c"
            }
        ]
    }"#;

    #[test]
    fn test_polygon_client_creation() {
        let client = PolygonClient::new("test_key", 5);
        assert_eq!(client.api_key, "test_key");
    }

    #[test]
    fn test_response_mapping_filters_unanalyzable_items() {
        let envelope: PolygonNewsResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let items: Vec<NewsItem> = envelope
            .results
            .unwrap()
            .into_iter()
            .map(|article| article.into_news_item("AAPL"))
            .filter(NewsItem::is_analyzable)
            .collect();

        // The article without a description is dropped
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].ticker, "AAPL");
        assert_eq!(items[0].source, "Reuters");
        assert_eq!(items[0].author, "Jane Doe");
        // Missing publisher and author fall back to "Unknown"
        assert_eq!(items[1].source, "Unknown");
        assert_eq!(items[1].author, "Unknown");
    }

    #[test]
    fn test_missing_results_is_an_error_shape() {
        let envelope: PolygonNewsResponse =
            serde_json::from_str(r#"{"status": "ERROR"}"#).unwrap();
        assert!(envelope.results.is_none());
        assert_eq!(envelope.status.as_deref(), Some("ERROR"));
    }
}
