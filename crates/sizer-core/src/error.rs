//! Error types for the position sizer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum SizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sizing error: {0}")]
    Sizing(#[from] SizingError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Domain errors from the position-sizing calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error(
        "entry price {entry_price} must be above stop-loss {stop_loss_price} for a long position"
    )]
    InvalidPosition {
        entry_price: Decimal,
        stop_loss_price: Decimal,
    },
}

/// Quote lookup errors. Never fatal: callers fall back to defaults.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Quote source returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for sizer operations.
pub type SizerResult<T> = Result<T, SizerError>;
