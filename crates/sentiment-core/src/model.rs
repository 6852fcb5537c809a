//! Core types for news items, per-article judgments, and aggregate results

use serde::{Deserialize, Serialize};

/// Midpoint default applied when the model omits score or confidence
const MIDPOINT: i64 = 50;

fn default_midpoint() -> i64 {
    MIDPOINT
}

/// Categorical sentiment direction for a stock
///
/// `Unknown` absorbs any label outside the three recognized values during
/// deserialization. Matching is case-sensitive: "Bullish" is not "bullish"
/// and lands in `Unknown`, which counts toward none of the three category
/// tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive expected price-movement implication
    Bullish,
    /// No expected price-movement implication
    Neutral,
    /// Negative expected price-movement implication
    Bearish,
    /// Unrecognized or missing label
    #[serde(other)]
    Unknown,
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Sentiment {
    /// Lowercase wire representation of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Neutral => "neutral",
            Self::Bearish => "bearish",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One news article about a stock, as supplied by the news collaborator
///
/// Items missing a title or description are not analyzable and are filtered
/// out by the news source before they reach the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Stock ticker symbol the article relates to
    pub ticker: String,
    /// Article headline
    pub title: String,
    /// Article summary text
    pub description: String,
    /// Article author, "Unknown" when the provider omits it
    #[serde(default)]
    pub author: String,
    /// Publish timestamp as reported by the provider (RFC 3339)
    #[serde(default)]
    pub published_utc: String,
    /// Link to the full article
    #[serde(default)]
    pub article_url: String,
    /// Publisher name
    #[serde(default)]
    pub source: String,
}

impl NewsItem {
    /// Whether the item carries enough text to be analyzed
    pub fn is_analyzable(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}

/// Structured sentiment judgment for a single article
///
/// This is both the analyzer's output type and the decode target for the
/// model's JSON payload. Missing-field defaults are encoded here, once:
/// score and confidence fall back to the 50 midpoint, sentiment to
/// `Unknown`. The aggregator never assumes the label and the score band
/// agree; they are treated as independently supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentJudgment {
    /// Sentiment label as reported by the model
    #[serde(default)]
    pub sentiment: Sentiment,
    /// 0-100 score: 50 = neutral, 100 = maximally bullish, 0 = maximally bearish
    #[serde(default = "default_midpoint")]
    pub score: i64,
    /// Self-reported confidence, 0-100
    #[serde(default = "default_midpoint")]
    pub confidence: i64,
    /// Short free-text explanation
    #[serde(default)]
    pub reason: String,
    /// Headline of the analyzed article, copied from the input item
    #[serde(default)]
    pub title: String,
    /// Publisher of the analyzed article, copied from the input item
    #[serde(default)]
    pub source: String,
    /// Publish timestamp of the analyzed article, copied from the input item
    #[serde(default)]
    pub published_utc: String,
}

/// Stock-level sentiment record produced by the aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Confidence-weighted mean score, 0-100, rounded to 2 decimals
    pub final_score: f64,
    /// Label derived from `final_score` via the aggregator thresholds
    pub sentiment: Sentiment,
    /// Number of judgments aggregated
    pub news_count: usize,
    /// Unweighted mean of per-article confidences, rounded to 2 decimals
    pub avg_confidence: f64,
    /// Judgments labeled exactly "bullish"
    pub bullish_count: usize,
    /// Judgments labeled exactly "bearish"
    pub bearish_count: usize,
    /// Judgments labeled exactly "neutral"
    pub neutral_count: usize,
    /// The aggregated judgments, in input order
    pub details: Vec<SentimentJudgment>,
}

impl AggregateResult {
    /// The defined result for an empty judgment list
    pub fn empty() -> Self {
        Self {
            final_score: 50.0,
            sentiment: Sentiment::Neutral,
            news_count: 0,
            avg_confidence: 0.0,
            bullish_count: 0,
            bearish_count: 0,
            neutral_count: 0,
            details: Vec::new(),
        }
    }
}
