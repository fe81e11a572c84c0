//! History table rendering.

use sizer_core::{HistoryLog, TradeCalculation};

const COMPANY_WIDTH: usize = 22;

/// Render the calculation history as a fixed-width text table, newest first.
pub fn render_history(history: &HistoryLog) -> String {
    let mut s = String::new();

    s.push_str("CALCULATION HISTORY\n");
    s.push_str(&format!(
        "{:<19}  {:<8}  {:<22}  {:>12}  {:>7}  {:>10}  {:>10}  {:>12}  {:>14}  {:>12}  {:>9}\n",
        "Timestamp",
        "Symbol",
        "Company",
        "Balance",
        "Risk %",
        "Entry",
        "Stop",
        "Size",
        "Value",
        "Risk Amt",
        "SL Dist",
    ));
    s.push_str(&"─".repeat(152));
    s.push('\n');

    for calc in history.iter() {
        s.push_str(&render_row(calc));
        s.push('\n');
    }

    s
}

fn render_row(calc: &TradeCalculation) -> String {
    format!(
        "{:<19}  {:<8}  {:<22}  {:>12.2}  {:>7.2}  {:>10.2}  {:>10.2}  {:>12.2}  {:>14.2}  {:>12.2}  {:>9.2}",
        calc.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        calc.symbol,
        truncate(calc.company_display(), COMPANY_WIDTH),
        calc.account_balance,
        calc.risk_percent,
        calc.entry_price,
        calc.stop_loss_price,
        calc.position_size,
        calc.trade_value,
        calc.risk_amount,
        calc.risk_per_unit,
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
