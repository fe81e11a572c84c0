//! CLI definitions.

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sizer")]
#[command(author, version, about = "Position-size calculator with quote lookup and session history")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a position size once and print the result
    Size(SizeArgs),
    /// Interactive session: repeated calculations with a shared history
    Session,
    /// Look up the latest quote for a symbol
    Quote(QuoteArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct SizeArgs {
    /// Ticker symbol (uppercased; config default when omitted)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Account balance
    #[arg(short, long, value_parser = parse_non_negative)]
    pub balance: Option<Decimal>,

    /// Risk per trade, percent of the balance
    #[arg(short, long, value_parser = parse_risk_percent)]
    pub risk: Option<Decimal>,

    /// Entry price (last close or fallback when omitted)
    #[arg(short, long, value_parser = parse_non_negative)]
    pub entry: Option<Decimal>,

    /// Stop-loss price (default: 95% of the entry price)
    #[arg(long, value_parser = parse_non_negative)]
    pub stop: Option<Decimal>,

    /// Skip the quote lookup and use configured defaults
    #[arg(long)]
    pub offline: bool,
}

#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Ticker symbol
    pub symbol: String,
}

/// Parse a non-negative decimal (balances and prices).
pub fn parse_non_negative(s: &str) -> Result<Decimal, String> {
    let value: Decimal = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value < Decimal::ZERO {
        return Err(format!("{} must not be negative", value));
    }
    Ok(value)
}

/// Parse a risk percentage in 0..=100.
pub fn parse_risk_percent(s: &str) -> Result<Decimal, String> {
    let value: Decimal = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err(format!("{} is outside the 0-100 range", value));
    }
    Ok(value)
}

/// Uppercase and validate a symbol from user input.
pub fn normalize_symbol(raw: &str) -> Result<String, String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err("symbol must not be empty".to_string());
    }
    Ok(symbol)
}
