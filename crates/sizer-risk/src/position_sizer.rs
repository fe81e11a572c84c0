//! Position sizing algorithm.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sizer_core::error::SizingError;
use sizer_core::types::TradeCalculation;

/// Result of a successful sizing computation, at full precision.
///
/// Carries the inputs alongside the four derived values so the caller can
/// turn it into a history record without re-supplying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sizing {
    pub account_balance: Decimal,
    pub risk_percent: Decimal,
    pub entry_price: Decimal,
    pub stop_loss_price: Decimal,
    /// entry - stop-loss, always positive
    pub risk_per_unit: Decimal,
    /// balance * risk% / 100
    pub risk_amount: Decimal,
    /// risk amount / risk per unit
    pub position_size: Decimal,
    /// position size * entry price
    pub trade_value: Decimal,
}

impl Sizing {
    /// Copy with the four derived values rounded to 2 decimal places.
    pub fn rounded(&self) -> Sizing {
        Sizing {
            risk_per_unit: self.risk_per_unit.round_dp(2),
            risk_amount: self.risk_amount.round_dp(2),
            position_size: self.position_size.round_dp(2),
            trade_value: self.trade_value.round_dp(2),
            ..self.clone()
        }
    }

    /// Build the immutable history record for this sizing.
    ///
    /// Inputs are kept as given (balance rounded to cents for display, as
    /// the original entry form does); derived values are rounded to 2 dp.
    pub fn into_record(
        self,
        symbol: impl Into<String>,
        company_name: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> TradeCalculation {
        TradeCalculation {
            timestamp,
            symbol: symbol.into(),
            company_name,
            account_balance: self.account_balance.round_dp(2),
            risk_percent: self.risk_percent,
            entry_price: self.entry_price.round_dp(2),
            stop_loss_price: self.stop_loss_price.round_dp(2),
            position_size: self.position_size.round_dp(2),
            trade_value: self.trade_value.round_dp(2),
            risk_amount: self.risk_amount.round_dp(2),
            risk_per_unit: self.risk_per_unit.round_dp(2),
        }
    }
}

/// Position sizer for long trades.
#[derive(Debug, Clone, Default)]
pub struct PositionSizer;

impl PositionSizer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the position size from balance, risk percent, entry, and stop.
    ///
    /// Numeric ranges (balance >= 0, risk in 0..=100, prices >= 0) are the
    /// caller's responsibility; they are enforced at the input boundary. The
    /// one domain rule checked here is the long-position invariant: the entry
    /// price must be strictly above the stop-loss price. Division by zero
    /// cannot occur once that holds.
    ///
    /// Pure computation: no I/O and no history mutation. Recording the result
    /// is a separate, explicit step for the caller.
    pub fn compute(
        &self,
        account_balance: Decimal,
        risk_percent: Decimal,
        entry_price: Decimal,
        stop_loss_price: Decimal,
    ) -> Result<Sizing, SizingError> {
        if entry_price <= stop_loss_price {
            return Err(SizingError::InvalidPosition {
                entry_price,
                stop_loss_price,
            });
        }

        let risk_per_unit = entry_price - stop_loss_price;
        let risk_amount = account_balance * (risk_percent / dec!(100));
        let position_size = risk_amount / risk_per_unit;
        let trade_value = position_size * entry_price;

        Ok(Sizing {
            account_balance,
            risk_percent,
            entry_price,
            stop_loss_price,
            risk_per_unit,
            risk_amount,
            position_size,
            trade_value,
        })
    }
}
