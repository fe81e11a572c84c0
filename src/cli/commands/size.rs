//! One-shot size command.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use sizer_config::load_config;
use sizer_core::{QuoteInfo, Session};
use sizer_data::{QuoteCache, QuoteService, YahooQuoteSource};
use sizer_risk::PositionSizer;
use tracing::info;

use crate::cli::render::render_history;
use crate::cli::{normalize_symbol, SizeArgs};

pub async fn run(args: SizeArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let defaults = config.defaults.clone();

    let symbol = normalize_symbol(args.symbol.as_deref().unwrap_or(&defaults.symbol))
        .map_err(anyhow::Error::msg)?;

    // Quote lookup is best-effort: absent quotes fall back to defaults.
    let quote = if args.offline {
        None
    } else {
        lookup_quote(&config, &symbol).await?
    };

    match &quote {
        Some(q) => println!("Company: {}", q.company_display()),
        None if !args.offline => {
            println!(
                "Warning: no quote data for {}, check the symbol or use the defaults",
                symbol
            );
        }
        None => {}
    }

    let balance = args.balance.unwrap_or(defaults.account_balance);
    let risk_percent = args.risk.unwrap_or(defaults.risk_percent);
    let entry_price = args.entry.unwrap_or_else(|| {
        quote
            .as_ref()
            .map(|q| q.last_close)
            .unwrap_or(defaults.fallback_entry_price)
    });
    let stop_loss_price = args
        .stop
        .unwrap_or_else(|| defaults.default_stop_loss(entry_price));

    let sizing = PositionSizer::new()
        .compute(balance, risk_percent, entry_price, stop_loss_price)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!(symbol = %symbol, "calculation confirmed");
    let company_name = quote.and_then(|q| q.company_name);
    let record = sizing.into_record(symbol, company_name, Utc::now());

    println!("Symbol: {} ({})", record.symbol, record.company_display());
    println!("Suggested position size: {:.2} units", record.position_size);
    println!("Trade value: {:.2}", record.trade_value);
    println!(
        "Risk amount: {:.2}, stop-loss distance: {:.2}",
        record.risk_amount, record.risk_per_unit
    );
    println!();

    let mut session = Session::new(
        defaults.symbol.clone(),
        defaults.account_balance,
        defaults.risk_percent,
    );
    session.record(record);
    println!("{}", render_history(session.history()));

    Ok(())
}

async fn lookup_quote(
    config: &sizer_config::AppConfig,
    symbol: &str,
) -> Result<Option<QuoteInfo>> {
    let source = YahooQuoteSource::with_base_url(
        &config.quotes.base_url,
        Duration::from_secs(config.quotes.timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    let cache = QuoteCache::new(Duration::from_secs(config.quotes.cache_ttl_secs));

    Ok(QuoteService::new(source, cache).latest(symbol).await)
}
