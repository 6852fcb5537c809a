//! Sentiment analysis prompt construction

use sentiment_core::NewsItem;

/// Build the per-article sentiment prompt
///
/// The prompt demands a single JSON object with exactly the four fields
/// the analyzer decodes, and no surrounding prose. Models still wrap the
/// payload in code fences often enough that the analyzer strips them
/// before decoding.
pub(crate) fn sentiment_prompt(item: &NewsItem) -> String {
    format!(
        r#"You are a professional financial analyst. Analyze the following news about {ticker} stock and provide a sentiment score.

News Title: {title}
News Summary: {description}
Published: {published_date}

Return ONLY valid JSON in this exact format (no other text, no markdown):
{{"sentiment": "bullish", "score": 75, "confidence": 80, "reason": "brief explanation"}}

Rules:
- sentiment: must be "bullish", "neutral", or "bearish"
- score: integer 0-100 (50=neutral, 100=extremely bullish, 0=extremely bearish)
- confidence: integer 0-100 (your confidence level)
- reason: brief explanation in under 30 words
- Return ONLY the JSON object, nothing else
"#,
        ticker = item.ticker,
        title = item.title,
        description = item.description,
        published_date = item.published_utc,
    )
}
