//! Value types shared across the workspace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display fallback when a quote carried no company name.
pub const COMPANY_NOT_FOUND: &str = "not found";

/// A single recorded position-size calculation.
///
/// Built only from a successful computation and never mutated afterwards.
/// The four derived values are rounded to 2 decimal places when the record
/// is created; full precision lives in `sizer-risk`'s `Sizing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeCalculation {
    /// When the calculation was confirmed
    pub timestamp: DateTime<Utc>,
    /// Uppercased ticker symbol
    pub symbol: String,
    /// Company name from the quote lookup, if any
    pub company_name: Option<String>,
    /// Account balance used as the risk base
    pub account_balance: Decimal,
    /// Percent of the balance risked on this trade (0-100)
    pub risk_percent: Decimal,
    /// Entry price
    pub entry_price: Decimal,
    /// Stop-loss price, strictly below the entry price
    pub stop_loss_price: Decimal,
    /// Units to buy so a stop-loss hit loses at most the risk amount
    pub position_size: Decimal,
    /// Notional exposure: position size times entry price
    pub trade_value: Decimal,
    /// Maximum acceptable loss: balance times risk percent
    pub risk_amount: Decimal,
    /// Price distance between entry and stop-loss
    pub risk_per_unit: Decimal,
}

impl TradeCalculation {
    /// Company name for display, falling back to "not found".
    pub fn company_display(&self) -> &str {
        self.company_name.as_deref().unwrap_or(COMPANY_NOT_FOUND)
    }
}

/// A quote for a single symbol: last close price and company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteInfo {
    /// Uppercased ticker symbol
    pub symbol: String,
    /// Most recent close price
    pub last_close: Decimal,
    /// Long company name, if the source knows it
    pub company_name: Option<String>,
    /// When the quote was fetched
    pub fetched_at: DateTime<Utc>,
}

impl QuoteInfo {
    /// Company name for display, falling back to "not found".
    pub fn company_display(&self) -> &str {
        self.company_name.as_deref().unwrap_or(COMPANY_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calculation(company_name: Option<String>) -> TradeCalculation {
        TradeCalculation {
            timestamp: Utc::now(),
            symbol: "TSLA".to_string(),
            company_name,
            account_balance: dec!(100000),
            risk_percent: dec!(1),
            entry_price: dec!(250),
            stop_loss_price: dec!(237.5),
            position_size: dec!(80),
            trade_value: dec!(20000),
            risk_amount: dec!(1000),
            risk_per_unit: dec!(12.5),
        }
    }

    #[test]
    fn test_company_display_present() {
        let calc = calculation(Some("Tesla, Inc.".to_string()));
        assert_eq!(calc.company_display(), "Tesla, Inc.");
    }

    #[test]
    fn test_company_display_fallback() {
        let calc = calculation(None);
        assert_eq!(calc.company_display(), "not found");
    }
}
