//! Session calculation history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::TradeCalculation;

/// Ordered log of recorded calculations, newest first.
///
/// Owned by a single [`Session`](crate::Session); there is no shared access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<TradeCalculation>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a calculation at the front of the log.
    pub fn record(&mut self, calculation: TradeCalculation) {
        self.entries.push_front(calculation);
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &TradeCalculation> {
        self.entries.iter()
    }

    /// The most recently recorded calculation.
    pub fn latest(&self) -> Option<&TradeCalculation> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn calculation(symbol: &str) -> TradeCalculation {
        TradeCalculation {
            timestamp: Utc::now(),
            symbol: symbol.to_string(),
            company_name: None,
            account_balance: dec!(100000),
            risk_percent: dec!(1),
            entry_price: dec!(100),
            stop_loss_price: dec!(95),
            position_size: dec!(200),
            trade_value: dec!(20000),
            risk_amount: dec!(1000),
            risk_per_unit: dec!(5),
        }
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut log = HistoryLog::new();
        log.record(calculation("FIRST"));
        log.record(calculation("SECOND"));
        log.record(calculation("THIRD"));

        let symbols: Vec<&str> = log.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["THIRD", "SECOND", "FIRST"]);
        assert_eq!(log.latest().unwrap().symbol, "THIRD");
    }

    #[test]
    fn test_len_and_clear() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());

        log.record(calculation("TSLA"));
        log.record(calculation("NVDA"));
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}
