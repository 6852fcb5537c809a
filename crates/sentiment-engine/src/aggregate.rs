//! Confidence-weighted sentiment aggregation

use sentiment_core::{AggregateResult, Sentiment, SentimentJudgment};

/// Tunable constants for the aggregation algorithm
#[derive(Debug, Clone, Copy)]
pub struct AggregatorConfig {
    /// Final scores at or above this value are labeled bullish
    pub bullish_threshold: f64,
    /// Final scores at or below this value are labeled bearish
    pub bearish_threshold: f64,
    /// Weight given to judgments reporting zero confidence
    ///
    /// A zero-confidence judgment is not silenced; it gets this
    /// neutral-default weight so its score still contributes and the
    /// total weight cannot collapse to zero.
    pub zero_confidence_weight: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            bullish_threshold: 60.0,
            bearish_threshold: 40.0,
            zero_confidence_weight: 0.5,
        }
    }
}

/// Combines per-article judgments into one stock-level record
///
/// `aggregate` is a pure function: no I/O, total over any input,
/// defined for the empty list.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    /// Create an aggregator with explicit thresholds
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Aggregate a batch of judgments into a stock-level result
    ///
    /// The sentiment label is derived from the unrounded weighted score,
    /// independently of the per-article labels; the two may disagree and
    /// that is expected. `details` preserves the input order.
    pub fn aggregate(&self, judgments: Vec<SentimentJudgment>) -> AggregateResult {
        if judgments.is_empty() {
            return AggregateResult::empty();
        }

        let bullish_count = count_label(&judgments, Sentiment::Bullish);
        let bearish_count = count_label(&judgments, Sentiment::Bearish);
        let neutral_count = count_label(&judgments, Sentiment::Neutral);

        let mut weighted_score = 0.0;
        let mut total_weight = 0.0;

        for judgment in &judgments {
            let weight = if judgment.confidence > 0 {
                judgment.confidence as f64 / 100.0
            } else {
                self.config.zero_confidence_weight
            };
            weighted_score += judgment.score as f64 * weight;
            total_weight += weight;
        }

        // The weight floor keeps total_weight positive for any non-empty
        // input; this branch is defensive only.
        let final_score = if total_weight > 0.0 {
            weighted_score / total_weight
        } else {
            50.0
        };

        let sentiment = if final_score >= self.config.bullish_threshold {
            Sentiment::Bullish
        } else if final_score <= self.config.bearish_threshold {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        };

        let avg_confidence = judgments
            .iter()
            .map(|j| j.confidence as f64)
            .sum::<f64>()
            / judgments.len() as f64;

        AggregateResult {
            final_score: round2(final_score),
            sentiment,
            news_count: judgments.len(),
            avg_confidence: round2(avg_confidence),
            bullish_count,
            bearish_count,
            neutral_count,
            details: judgments,
        }
    }
}

fn count_label(judgments: &[SentimentJudgment], label: Sentiment) -> usize {
    judgments.iter().filter(|j| j.sentiment == label).count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
