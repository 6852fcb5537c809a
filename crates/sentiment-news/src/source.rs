//! News source trait definition

use async_trait::async_trait;
use sentiment_core::NewsItem;

/// Trait for news providers
///
/// Implementations return recent articles for a ticker, newest first.
/// Fetch errors are swallowed by the implementation (and logged there);
/// callers only ever see an empty list.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch recent news for a ticker
    ///
    /// # Arguments
    ///
    /// * `ticker` - Stock ticker symbol (e.g., "AAPL")
    /// * `limit` - Maximum number of articles to return
    /// * `days_back` - Lookback window in days
    async fn recent_news(&self, ticker: &str, limit: usize, days_back: i64) -> Vec<NewsItem>;

    /// Get the source name (e.g., "polygon")
    fn name(&self) -> &str;
}
