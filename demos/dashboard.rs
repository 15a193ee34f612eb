//! Print the current top-20 market table and a one-week summary for one asset.
//!
//! ```bash
//! cargo run --example dashboard -- ethereum
//! ```

use cryptodash_sdk::prelude::*;
use cryptodash_sdk::shared::fmt::decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let asset = std::env::args().nth(1).unwrap_or_else(|| "bitcoin".to_string());
    let client = DashboardClient::builder().build()?;

    let quotes = client.markets().snapshot().await?;
    println!("{:<6} {:<20} {:>16} {:>9}", "SYM", "NAME", "PRICE", "24H");
    for row in quotes.iter().map(AssetQuote::display_row) {
        println!(
            "{:<6} {:<20} {:>16} {:>9}",
            row.symbol,
            row.name,
            format!("${}", row.price),
            row.change
        );
    }

    match client.price_history().summary(&asset, Timeframe::OneWeek).await {
        Ok(Some(summary)) => {
            println!();
            println!("{asset} over {}:", Timeframe::OneWeek);
            println!("  high   ${}", decimal::price(&summary.high.price));
            println!("  low    ${}", decimal::price(&summary.low.price));
            if let Some(pct) = summary.change_percent {
                println!("  change {}", decimal::percent(&pct));
            }
        }
        Ok(None) => println!("{asset}: no price history"),
        Err(e) => println!("{asset}: {e}"),
    }

    if let Some(first) = quotes.first() {
        client.recorder().record(first).await;
    }
    Ok(())
}
