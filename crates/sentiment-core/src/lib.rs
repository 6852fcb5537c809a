//! Shared data model for stock news sentiment analysis
//!
//! This crate defines the types exchanged between the news collaborator,
//! the per-article analyzer, and the aggregator. Pure data, no I/O.

pub mod model;

pub use model::{AggregateResult, NewsItem, Sentiment, SentimentJudgment};
