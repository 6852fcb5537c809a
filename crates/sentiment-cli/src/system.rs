//! Orchestration of the news source, analyzer, and aggregator

use anyhow::Context;
use chrono::{DateTime, Utc};
use sentiment_core::AggregateResult;
use sentiment_engine::{Aggregator, ArticleAnalyzer, EngineConfig};
use sentiment_llm::{TextGenerator, WaveSpeedProvider};
use sentiment_news::{NewsSource, PolygonClient};
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

/// Default watchlist (tech sector)
pub const TECH_WATCHLIST: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "AMD", "INTC", "CRM",
];

/// Requests per minute against Polygon (free tier)
const POLYGON_RATE_LIMIT: u32 = 5;

/// Terminal artifact for one analyzed stock
#[derive(Debug, Clone, Serialize)]
pub struct StockReport {
    /// Ticker symbol the report covers
    pub ticker: String,
    /// When the analysis ran
    pub analysis_time: DateTime<Utc>,
    /// Aggregated sentiment record
    #[serde(flatten)]
    pub result: AggregateResult,
}

/// Wires the external collaborators to the core engine
pub struct SentimentSystem {
    news: Arc<dyn NewsSource>,
    analyzer: ArticleAnalyzer,
    aggregator: Aggregator,
    news_limit: usize,
    lookback_days: i64,
}

impl SentimentSystem {
    /// Build a system from explicit collaborators
    pub fn new(
        news: Arc<dyn NewsSource>,
        generator: Arc<dyn TextGenerator>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            news,
            analyzer: ArticleAnalyzer::new(generator),
            aggregator: Aggregator::new(config.aggregator),
            news_limit: config.news_limit,
            lookback_days: config.lookback_days,
        }
    }

    /// Build a system with the Polygon and WaveSpeed clients, keys from env
    pub fn from_env(config: &EngineConfig) -> anyhow::Result<Self> {
        let news =
            PolygonClient::from_env(POLYGON_RATE_LIMIT).context("Failed to create news client")?;

        let api_key = std::env::var("WAVESPEED_API_KEY")
            .context("WAVESPEED_API_KEY environment variable not set")?;
        let generator =
            WaveSpeedProvider::new(api_key, config.model.clone(), config.request_timeout)
                .context("Failed to create text-generation client")?;

        Ok(Self::new(Arc::new(news), Arc::new(generator), config))
    }

    /// Analyze sentiment for a single stock
    pub async fn analyze_stock(&self, ticker: &str) -> StockReport {
        info!(ticker, "Fetching news");
        let items = self
            .news
            .recent_news(ticker, self.news_limit, self.lookback_days)
            .await;

        if items.is_empty() {
            warn!(ticker, "No news found");
        } else {
            info!(ticker, count = items.len(), "Analyzing sentiment");
        }

        let judgments = self.analyzer.analyze_batch(&items).await;
        let result = self.aggregator.aggregate(judgments);

        StockReport {
            ticker: ticker.to_string(),
            analysis_time: Utc::now(),
            result,
        }
    }

    /// Analyze a list of stocks sequentially, best score first
    pub async fn analyze_watchlist(&self, tickers: &[&str]) -> Vec<StockReport> {
        let mut reports = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            reports.push(self.analyze_stock(ticker).await);
        }

        reports.sort_by(|a, b| {
            b.result
                .final_score
                .partial_cmp(&a.result.final_score)
                .unwrap_or(Ordering::Equal)
        });
        reports
    }
}
