//! Risk-based position sizing.
//!
//! Answers one question: how many units can be bought so that a stop-loss
//! hit loses no more than the chosen fraction of the account.

mod position_sizer;

pub use position_sizer::{PositionSizer, Sizing};
