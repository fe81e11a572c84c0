//! Session context.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::history::HistoryLog;
use crate::types::TradeCalculation;

/// Session-scoped state: the input defaults and the calculation history.
///
/// All state lives here explicitly rather than in process-wide globals. The
/// session is dropped when the process ends; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Default symbol offered for the next calculation
    pub default_symbol: String,
    /// Default account balance
    pub default_balance: Decimal,
    /// Default risk percent
    pub default_risk_percent: Decimal,
    history: HistoryLog,
}

impl Session {
    /// Create a session with the given input defaults and an empty history.
    pub fn new(
        default_symbol: impl Into<String>,
        default_balance: Decimal,
        default_risk_percent: Decimal,
    ) -> Self {
        Self {
            default_symbol: default_symbol.into(),
            default_balance,
            default_risk_percent,
            history: HistoryLog::new(),
        }
    }

    /// Record a confirmed calculation into the session history.
    pub fn record(&mut self, calculation: TradeCalculation) {
        self.history.record(calculation);
    }

    /// The session history, newest first.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_appends_to_history() {
        let mut session = Session::new("TSLA", dec!(100000), dec!(1));
        assert!(session.history().is_empty());

        session.record(TradeCalculation {
            timestamp: Utc::now(),
            symbol: "TSLA".to_string(),
            company_name: Some("Tesla, Inc.".to_string()),
            account_balance: dec!(100000),
            risk_percent: dec!(1),
            entry_price: dec!(250),
            stop_loss_price: dec!(237.5),
            position_size: dec!(80),
            trade_value: dec!(20000),
            risk_amount: dec!(1000),
            risk_per_unit: dec!(12.5),
        });

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().latest().unwrap().symbol, "TSLA");
    }
}
