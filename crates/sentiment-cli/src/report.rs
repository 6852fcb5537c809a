//! Console output for analysis reports

use crate::system::StockReport;
use comfy_table::Table;
use sentiment_core::Sentiment;

fn sentiment_tag(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bullish => "[+]",
        Sentiment::Neutral => "[=]",
        Sentiment::Bearish => "[-]",
        Sentiment::Unknown => "[?]",
    }
}

/// Print the full report for a single stock, article details included
pub fn print_report(report: &StockReport) {
    let result = &report.result;

    println!("\n{}", "=".repeat(60));
    println!("Result: {}", report.ticker);
    println!("{}", "=".repeat(60));
    println!("Final Score:    {:.1} / 100", result.final_score);
    println!("Sentiment:      {}", result.sentiment.as_str().to_uppercase());
    println!("Articles:       {}", result.news_count);
    println!("Avg Confidence: {:.1}%", result.avg_confidence);
    println!(
        "Bullish/Neutral/Bearish: {}/{}/{}",
        result.bullish_count, result.neutral_count, result.bearish_count
    );

    if !result.details.is_empty() {
        println!("\n--- Article Details ---");
        for (i, detail) in result.details.iter().enumerate() {
            let title: String = detail.title.chars().take(60).collect();
            println!(
                "\n{}. {} [Score:{}] {}",
                i + 1,
                sentiment_tag(detail.sentiment),
                detail.score,
                title
            );
            println!("   Reason: {}", detail.reason);
        }
    }
}

/// Build the multi-stock summary table, best score first
pub fn summary_table(reports: &[StockReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Rank",
        "Ticker",
        "Score",
        "Sentiment",
        "Articles",
        "Confidence",
    ]);

    for (i, report) in reports.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            report.ticker.clone(),
            format!("{:.1}", report.result.final_score),
            report.result.sentiment.as_str().to_uppercase(),
            report.result.news_count.to_string(),
            format!("{:.1}", report.result.avg_confidence),
        ]);
    }

    table
}

/// Print the summary for a watchlist run
pub fn print_summary(reports: &[StockReport]) {
    println!("\n{}", "=".repeat(70));
    println!("Stock Sentiment Analysis Summary");
    println!("{}", "=".repeat(70));
    if let Some(first) = reports.first() {
        println!("Time: {}", first.analysis_time.format("%Y-%m-%d %H:%M:%S"));
    }
    println!("Stocks Analyzed: {}", reports.len());

    println!("{}", summary_table(reports));

    let bullish: Vec<&str> = reports
        .iter()
        .filter(|r| r.result.sentiment == Sentiment::Bullish)
        .map(|r| r.ticker.as_str())
        .collect();
    let bearish: Vec<&str> = reports
        .iter()
        .filter(|r| r.result.sentiment == Sentiment::Bearish)
        .map(|r| r.ticker.as_str())
        .collect();

    if !bullish.is_empty() {
        println!("\nBullish: {}", bullish.join(", "));
    }
    if !bearish.is_empty() {
        println!("Bearish: {}", bearish.join(", "));
    }

    if !reports.is_empty() {
        let average = reports.iter().map(|r| r.result.final_score).sum::<f64>()
            / reports.len() as f64;
        println!("\nAverage Score: {average:.1}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sentiment_core::AggregateResult;

    fn report(ticker: &str, final_score: f64, sentiment: Sentiment) -> StockReport {
        StockReport {
            ticker: ticker.to_string(),
            analysis_time: Utc::now(),
            result: AggregateResult {
                final_score,
                sentiment,
                news_count: 3,
                avg_confidence: 72.5,
                bullish_count: 2,
                bearish_count: 0,
                neutral_count: 1,
                details: Vec::new(),
            },
        }
    }

    #[test]
    fn tags_cover_every_label() {
        assert_eq!(sentiment_tag(Sentiment::Bullish), "[+]");
        assert_eq!(sentiment_tag(Sentiment::Neutral), "[=]");
        assert_eq!(sentiment_tag(Sentiment::Bearish), "[-]");
        assert_eq!(sentiment_tag(Sentiment::Unknown), "[?]");
    }

    #[test]
    fn summary_table_lists_every_report_in_rank_order() {
        let reports = vec![
            report("NVDA", 78.5, Sentiment::Bullish),
            report("INTC", 32.0, Sentiment::Bearish),
        ];

        let rendered = summary_table(&reports).to_string();
        assert!(rendered.contains("NVDA"));
        assert!(rendered.contains("78.5"));
        assert!(rendered.contains("BULLISH"));
        assert!(rendered.contains("INTC"));
        assert!(rendered.contains("BEARISH"));
    }
}
