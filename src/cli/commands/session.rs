//! Interactive session command.
//!
//! The form-and-history workflow: prompt for the inputs with sensible
//! defaults, compute on confirmation, and re-render the session history
//! after every successful calculation. One session, one history, nothing
//! persisted.

use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use rust_decimal::Decimal;
use sizer_config::load_config;
use sizer_core::Session;
use sizer_data::{QuoteCache, QuoteService, YahooQuoteSource};
use sizer_risk::PositionSizer;
use tracing::info;

use crate::cli::render::render_history;
use crate::cli::{normalize_symbol, parse_non_negative, parse_risk_percent};

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let defaults = config.defaults.clone();

    let source = YahooQuoteSource::with_base_url(
        &config.quotes.base_url,
        Duration::from_secs(config.quotes.timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    let mut quotes = QuoteService::new(
        source,
        QuoteCache::new(Duration::from_secs(config.quotes.cache_ttl_secs)),
    );

    let mut session = Session::new(
        defaults.symbol.clone(),
        defaults.account_balance,
        defaults.risk_percent,
    );
    let sizer = PositionSizer::new();

    println!("Position size calculator. Empty symbol or 'q' quits.");
    println!();

    loop {
        let Some(symbol) = prompt_symbol(&session.default_symbol)? else {
            break;
        };

        let quote = quotes.latest(&symbol).await;
        match &quote {
            Some(q) => println!("Company: {}", q.company_display()),
            None => println!(
                "Warning: no quote data for {}, check the symbol or use the defaults",
                symbol
            ),
        }

        let balance = prompt_decimal("Account balance", session.default_balance, |raw| {
            parse_non_negative(raw)
        })?;
        let risk_percent = prompt_decimal("Risk per trade (%)", session.default_risk_percent, |raw| {
            parse_risk_percent(raw)
        })?;

        let entry_default = quote
            .as_ref()
            .map(|q| q.last_close)
            .unwrap_or(defaults.fallback_entry_price);
        let entry_label = match &quote {
            Some(q) => format!("Entry price (last close {:.2})", q.last_close),
            None => "Entry price".to_string(),
        };
        let entry_price = prompt_decimal(&entry_label, entry_default, |raw| {
            parse_non_negative(raw)
        })?;
        let stop_loss_price = prompt_decimal(
            "Stop-loss price",
            defaults.default_stop_loss(entry_price).round_dp(2),
            |raw| parse_non_negative(raw),
        )?;

        match sizer.compute(balance, risk_percent, entry_price, stop_loss_price) {
            Ok(sizing) => {
                info!(symbol = %symbol, "calculation confirmed");
                let company_name = quote.and_then(|q| q.company_name);
                let record = sizing.into_record(symbol, company_name, Utc::now());

                println!();
                println!("Symbol: {} ({})", record.symbol, record.company_display());
                println!("Suggested position size: {:.2} units", record.position_size);
                println!("Trade value: {:.2}", record.trade_value);
                println!(
                    "Risk amount: {:.2}, stop-loss distance: {:.2}",
                    record.risk_amount, record.risk_per_unit
                );
                println!();

                session.record(record);
                println!("{}", render_history(session.history()));
            }
            Err(e) => {
                // Invalid position: report, keep the history untouched, go again
                println!("Error: {}", e);
                println!();
            }
        }
    }

    Ok(())
}

/// Prompt for a symbol. `None` means the user wants out.
fn prompt_symbol(default: &str) -> Result<Option<String>> {
    loop {
        let Some(raw) = prompt_line(&format!("Symbol [{}]", default))? else {
            return Ok(None);
        };
        if raw.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if raw.is_empty() {
            return Ok(None);
        }
        match normalize_symbol(&raw) {
            Ok(symbol) => return Ok(Some(symbol)),
            Err(msg) => println!("  {}", msg),
        }
    }
}

/// Prompt for a number, re-asking until it parses and passes validation.
/// Empty input takes the default.
fn prompt_decimal(
    label: &str,
    default: Decimal,
    parse: impl Fn(&str) -> Result<Decimal, String>,
) -> Result<Decimal> {
    loop {
        let Some(raw) = prompt_line(&format!("{} [{}]", label, default))? else {
            return Ok(default);
        };
        if raw.is_empty() {
            return Ok(default);
        }
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(msg) => println!("  {}", msg),
        }
    }
}

/// Read one trimmed line from stdin. `None` on end of input.
fn prompt_line(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    stdout().flush()?;

    let mut line = String::new();
    let bytes = stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
