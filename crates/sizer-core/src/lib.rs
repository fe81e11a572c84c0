//! Core types and traits for the position sizer.
//!
//! This crate provides the foundational building blocks including:
//! - Value types (TradeCalculation, QuoteInfo)
//! - The session-scoped calculation history
//! - The quote source trait
//! - Error types

pub mod error;
pub mod history;
pub mod session;
pub mod traits;
pub mod types;

pub use error::{LookupError, SizerError, SizerResult, SizingError};
pub use history::HistoryLog;
pub use session::Session;
pub use traits::QuoteSource;
pub use types::{QuoteInfo, TradeCalculation};
