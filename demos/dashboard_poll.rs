use std::time::Duration;

use qtquote_rs::{MarketHours, MarketSnapshot, Profile, QtClient, QuoteBook};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = QtClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let mut market = MarketSnapshot::new(&client).hours(MarketHours::Shanghai);
    let mut quotes = QuoteBook::new(&client, Profile::with_tickers(["sh600519", "sz000001"])?);

    println!("--- Polling the quote server every 5 seconds (3 rounds) ---");

    for _ in 0..3 {
        market.refresh().await;
        quotes.refresh(&market).await;

        match market.ok() {
            (true, _) => {
                for (index, summary) in market.board().populated() {
                    println!(
                        "{index:?}: {} {} ({}%)",
                        summary.latest().unwrap_or("-"),
                        summary.change().unwrap_or("-"),
                        summary.percent().unwrap_or("-"),
                    );
                }
            }
            (false, message) => eprintln!("{message}"),
        }

        match quotes.ok() {
            (true, _) => {
                let stocks = quotes.stocks().unwrap_or_else(|| Vec::new().into());
                for stock in stocks.iter() {
                    let arrow = if stock.advancing { "▲" } else { "▼" };
                    println!(
                        "{arrow} {} {} {} {}%",
                        stock.ticker, stock.name, stock.last_trade, stock.change_pct
                    );
                }
            }
            (false, message) => eprintln!("{message}"),
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    Ok(())
}
