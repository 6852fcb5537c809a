//! Core engine for stock news sentiment analysis
//!
//! Two components, consumed by a thin orchestrator:
//!
//! - [`ArticleAnalyzer`] turns one news item plus a text-generation
//!   capability into a structured [`sentiment_core::SentimentJudgment`],
//!   tolerant of malformed model output.
//! - [`Aggregator`] combines a list of judgments into one stock-level
//!   [`sentiment_core::AggregateResult`] using confidence-weighted
//!   averaging.
//!
//! No error ever propagates past the analyzer boundary: a failed
//! generation call or an unparseable payload becomes a neutral fallback
//! judgment, and the aggregator is total over any judgment list.

pub mod aggregate;
pub mod analyzer;
pub mod config;
mod prompt;

pub use aggregate::{Aggregator, AggregatorConfig};
pub use analyzer::{ANALYSIS_FAILED_REASON, ArticleAnalyzer};
pub use config::{ConfigError, EngineConfig, EngineConfigBuilder};
