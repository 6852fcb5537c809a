//! Command-line interface for stock news sentiment analysis

mod logging;
mod report;
mod system;

use clap::Parser;
use sentiment_engine::EngineConfig;
use system::SentimentSystem;

#[derive(Parser, Debug)]
#[command(name = "sentiment-cli")]
#[command(about = "Stock news sentiment analysis", long_about = None)]
struct Args {
    /// Analyze a single stock (e.g., AAPL)
    #[arg(short, long)]
    ticker: Option<String>,

    /// Analyze the whole tech watchlist
    #[arg(short, long)]
    all: bool,

    /// Number of news articles per stock
    #[arg(short = 'n', long, default_value_t = 5)]
    news_limit: usize,

    /// News lookback window in days
    #[arg(long, default_value_t = 3)]
    days: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let args = Args::parse();

    let config = EngineConfig::builder()
        .news_limit(args.news_limit)
        .lookback_days(args.days)
        .build()?;
    let system = SentimentSystem::from_env(&config)?;

    if let Some(ticker) = args.ticker {
        let stock_report = system.analyze_stock(&ticker.to_uppercase()).await;
        report::print_report(&stock_report);
    } else if args.all {
        let reports = system.analyze_watchlist(system::TECH_WATCHLIST).await;
        report::print_summary(&reports);
    } else {
        println!("Stock News Sentiment Analysis");
        println!();
        println!("Usage:");
        println!("  sentiment-cli -t AAPL          # Analyze a single stock");
        println!("  sentiment-cli -a               # Analyze the tech watchlist");
        println!("  sentiment-cli -t NVDA -n 10    # Analyze NVDA with 10 articles");
        println!();
        println!("Running demo with AAPL, NVDA, MSFT...");

        let reports = system.analyze_watchlist(&["AAPL", "NVDA", "MSFT"]).await;
        report::print_summary(&reports);
    }

    Ok(())
}
