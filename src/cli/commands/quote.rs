//! Quote lookup command.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use sizer_config::load_config;
use sizer_data::{QuoteCache, QuoteService, YahooQuoteSource};

use crate::cli::{normalize_symbol, QuoteArgs};

pub async fn run(args: QuoteArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let symbol = normalize_symbol(&args.symbol).map_err(anyhow::Error::msg)?;

    let source = YahooQuoteSource::with_base_url(
        &config.quotes.base_url,
        Duration::from_secs(config.quotes.timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    let mut quotes = QuoteService::new(
        source,
        QuoteCache::new(Duration::from_secs(config.quotes.cache_ttl_secs)),
    );

    match quotes.latest(&symbol).await {
        Some(quote) => {
            println!("Symbol: {}", quote.symbol);
            println!("Company: {}", quote.company_display());
            println!("Last close: {:.2}", quote.last_close);
        }
        None => {
            // Absent quotes are a warning, not a failure
            println!("Warning: no quote data for {}", symbol);
        }
    }

    Ok(())
}
