//! Per-article sentiment analyzer
//!
//! Wraps a text-generation capability and turns one news item into a
//! structured judgment. The contract is total: any transport failure or
//! malformed model output collapses into a well-defined neutral fallback
//! judgment, so the aggregator never sees a missing or half-built record.

use crate::prompt::sentiment_prompt;
use sentiment_core::{NewsItem, Sentiment, SentimentJudgment};
use sentiment_llm::{LlmError, TextGenerator};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed reason string carried by every fallback judgment
pub const ANALYSIS_FAILED_REASON: &str = "Analysis failed, using default";

/// Internal failure taxonomy, distinguished for logging only
///
/// Both variants resolve to the same fallback judgment at the boundary;
/// callers cannot tell them apart from the return value alone.
#[derive(Debug, Error)]
enum AnalysisFailure {
    /// The generation call failed (transport, timeout, or service error)
    #[error("generation call failed: {0}")]
    Generation(#[from] LlmError),

    /// The service responded but the payload was not a decodable JSON object
    #[error("malformed model output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Analyzer turning news items into sentiment judgments via an LLM
pub struct ArticleAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl ArticleAnalyzer {
    /// Create an analyzer backed by the given text-generation provider
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Analyze a single news item
    ///
    /// Never fails: on any internal failure this returns the fallback
    /// judgment (neutral, score 50, confidence 0, fixed failure reason)
    /// with provenance copied from the input item.
    pub async fn analyze(&self, item: &NewsItem) -> SentimentJudgment {
        match self.try_analyze(item).await {
            Ok(judgment) => judgment,
            Err(failure) => {
                match &failure {
                    AnalysisFailure::Generation(e) => {
                        warn!(title = %item.title, error = %e, "Text generation failed, using fallback judgment");
                    }
                    AnalysisFailure::MalformedOutput(e) => {
                        warn!(title = %item.title, error = %e, "Model output was not a valid judgment, using fallback");
                    }
                }
                Self::fallback_judgment(item)
            }
        }
    }

    /// Analyze a batch of news items sequentially
    ///
    /// Output order and length match the input exactly, fallbacks
    /// included. A failure on one item never aborts the rest.
    pub async fn analyze_batch(&self, items: &[NewsItem]) -> Vec<SentimentJudgment> {
        let mut judgments = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            debug!(current = i + 1, total = items.len(), "Analyzing article");
            judgments.push(self.analyze(item).await);
        }

        judgments
    }

    async fn try_analyze(
        &self,
        item: &NewsItem,
    ) -> std::result::Result<SentimentJudgment, AnalysisFailure> {
        let prompt = sentiment_prompt(item);
        let raw = self.generator.generate(&prompt).await?;

        let cleaned = strip_code_fences(&raw);
        let mut judgment: SentimentJudgment = serde_json::from_str(cleaned)?;

        // Provenance always comes from the input item, regardless of what
        // the model may have echoed back.
        judgment.title = item.title.clone();
        judgment.source = item.source.clone();
        judgment.published_utc = item.published_utc.clone();

        Ok(judgment)
    }

    fn fallback_judgment(item: &NewsItem) -> SentimentJudgment {
        SentimentJudgment {
            sentiment: Sentiment::Neutral,
            score: 50,
            confidence: 0,
            reason: ANALYSIS_FAILED_REASON.to_string(),
            title: item.title.clone(),
            source: item.source.clone(),
            published_utc: item.published_utc.clone(),
        }
    }
}

/// Strip leading/trailing markdown code-fence markers from a payload
///
/// Handles both tagged (```json) and untagged (```) fences; an unclosed
/// fence keeps everything after the opener.
fn strip_code_fences(text: &str) -> &str {
    if let Some((_, after)) = text.split_once("```json") {
        let inner = after.split_once("```").map_or(after, |(inner, _)| inner);
        inner.trim()
    } else if let Some((_, after)) = text.split_once("```") {
        let inner = after.split_once("```").map_or(after, |(inner, _)| inner);
        inner.trim()
    } else {
        text.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            ticker: "AAPL".to_string(),
            title: title.to_string(),
            description: "Some description.".to_string(),
            author: "Unknown".to_string(),
            published_utc: "2026-02-05T10:00:00Z".to_string(),
            article_url: "https://example.com/a".to_string(),
            source: "Reuters".to_string(),
        }
    }

    /// Returns the same payload for every prompt
    struct CannedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> sentiment_llm::Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    /// Simulates a transport failure on every call
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> sentiment_llm::Result<String> {
            Err(LlmError::RequestFailed("connection reset".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    /// Fails only for prompts mentioning the marker title
    struct FlakyGenerator;

    #[async_trait]
    impl TextGenerator for FlakyGenerator {
        async fn generate(&self, prompt: &str) -> sentiment_llm::Result<String> {
            if prompt.contains("UNREACHABLE") {
                Err(LlmError::RequestFailed("timeout".to_string()))
            } else {
                Ok(r#"{"sentiment":"bullish","score":80,"confidence":90,"reason":"strong"}"#
                    .to_string())
            }
        }

        fn name(&self) -> &'static str {
            "flaky"
        }
    }

    #[tokio::test]
    async fn decodes_fenced_payload_with_language_tag() {
        let payload = "```json\n{\"sentiment\":\"bearish\",\"score\":20,\"confidence\":70,\"reason\":\"x\"}\n```";
        let analyzer = ArticleAnalyzer::new(Arc::new(CannedGenerator(payload)));

        let judgment = analyzer.analyze(&item("Supply Chain Woes")).await;
        assert_eq!(judgment.sentiment, Sentiment::Bearish);
        assert_eq!(judgment.score, 20);
        assert_eq!(judgment.confidence, 70);
        assert_eq!(judgment.reason, "x");
        // Provenance comes from the item, not the payload
        assert_eq!(judgment.title, "Supply Chain Woes");
        assert_eq!(judgment.source, "Reuters");
        assert_eq!(judgment.published_utc, "2026-02-05T10:00:00Z");
    }

    #[tokio::test]
    async fn decodes_fenced_payload_without_language_tag() {
        let payload = "```\n{\"sentiment\":\"neutral\",\"score\":50,\"confidence\":40,\"reason\":\"mixed\"}\n```";
        let analyzer = ArticleAnalyzer::new(Arc::new(CannedGenerator(payload)));

        let judgment = analyzer.analyze(&item("Mixed Quarter")).await;
        assert_eq!(judgment.sentiment, Sentiment::Neutral);
        assert_eq!(judgment.confidence, 40);
    }

    #[tokio::test]
    async fn model_echoed_provenance_is_overwritten() {
        let payload = r#"{"sentiment":"bullish","score":85,"confidence":75,"reason":"beat","title":"model-invented title","source":"model-invented source"}"#;
        let analyzer = ArticleAnalyzer::new(Arc::new(CannedGenerator(payload)));

        let judgment = analyzer.analyze(&item("Earnings Beat")).await;
        assert_eq!(judgment.score, 85);
        assert_eq!(judgment.title, "Earnings Beat");
        assert_eq!(judgment.source, "Reuters");
    }

    #[tokio::test]
    async fn transport_failure_yields_fallback_judgment() {
        let analyzer = ArticleAnalyzer::new(Arc::new(FailingGenerator));

        let judgment = analyzer.analyze(&item("Unreachable Service")).await;
        assert_eq!(judgment.sentiment, Sentiment::Neutral);
        assert_eq!(judgment.score, 50);
        assert_eq!(judgment.confidence, 0);
        assert_eq!(judgment.reason, ANALYSIS_FAILED_REASON);
        assert_eq!(judgment.title, "Unreachable Service");
        assert_eq!(judgment.source, "Reuters");
        assert_eq!(judgment.published_utc, "2026-02-05T10:00:00Z");
    }

    #[tokio::test]
    async fn unparseable_payload_yields_fallback_judgment() {
        let analyzer = ArticleAnalyzer::new(Arc::new(CannedGenerator(
            "The sentiment here is clearly bullish, I would say 80 out of 100.",
        )));

        let judgment = analyzer.analyze(&item("Chatty Model")).await;
        assert_eq!(judgment.sentiment, Sentiment::Neutral);
        assert_eq!(judgment.confidence, 0);
        assert_eq!(judgment.reason, ANALYSIS_FAILED_REASON);
    }

    #[tokio::test]
    async fn non_object_json_yields_fallback_judgment() {
        let analyzer = ArticleAnalyzer::new(Arc::new(CannedGenerator("[1, 2, 3]")));

        let judgment = analyzer.analyze(&item("Array Payload")).await;
        assert_eq!(judgment.reason, ANALYSIS_FAILED_REASON);
    }

    #[tokio::test]
    async fn batch_preserves_order_and_length_with_mixed_outcomes() {
        let analyzer = ArticleAnalyzer::new(Arc::new(FlakyGenerator));
        let items = vec![
            item("First Headline"),
            item("UNREACHABLE Headline"),
            item("Third Headline"),
        ];

        let judgments = analyzer.analyze_batch(&items).await;
        assert_eq!(judgments.len(), 3);
        assert_eq!(judgments[0].title, "First Headline");
        assert_eq!(judgments[0].sentiment, Sentiment::Bullish);
        assert_eq!(judgments[1].title, "UNREACHABLE Headline");
        assert_eq!(judgments[1].reason, ANALYSIS_FAILED_REASON);
        assert_eq!(judgments[2].title, "Third Headline");
        assert_eq!(judgments[2].sentiment, Sentiment::Bullish);
    }

    #[test]
    fn strip_code_fences_variants() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(
            strip_code_fences("Here you go:\n```json\n{\"a\":1}\n```\nHope that helps!"),
            "{\"a\":1}"
        );
        // Unclosed fence keeps everything after the opener
        assert_eq!(strip_code_fences("```json\n{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }
}
