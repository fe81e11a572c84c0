//! Configuration structures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub quotes: QuoteSettings,
    #[serde(default)]
    pub defaults: TradeDefaults,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "sizer".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Quote lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Base URL of the chart API
    pub base_url: String,
    /// How long a fetched quote stays fresh
    pub cache_ttl_secs: u64,
    /// HTTP request timeout
    pub timeout_secs: u64,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            cache_ttl_secs: 300,
            timeout_secs: 10,
        }
    }
}

/// Defaults for the calculation inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDefaults {
    /// Symbol offered when none is given
    pub symbol: String,
    /// Account balance
    pub account_balance: Decimal,
    /// Risk percent per trade (0-100)
    pub risk_percent: Decimal,
    /// Entry price used when the quote lookup comes back empty
    pub fallback_entry_price: Decimal,
    /// Default stop-loss as a fraction of the entry price
    pub stop_loss_ratio: Decimal,
}

impl Default for TradeDefaults {
    fn default() -> Self {
        Self {
            symbol: "TSLA".to_string(),
            account_balance: dec!(100000),
            risk_percent: dec!(1),
            fallback_entry_price: dec!(100),
            stop_loss_ratio: dec!(0.95),
        }
    }
}

impl TradeDefaults {
    /// Default stop-loss price for a given entry price.
    pub fn default_stop_loss(&self, entry_price: Decimal) -> Decimal {
        entry_price * self.stop_loss_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_defaults_match_form_defaults() {
        let defaults = TradeDefaults::default();
        assert_eq!(defaults.symbol, "TSLA");
        assert_eq!(defaults.account_balance, dec!(100000));
        assert_eq!(defaults.risk_percent, dec!(1));
        assert_eq!(defaults.fallback_entry_price, dec!(100));
    }

    #[test]
    fn test_default_stop_loss_is_95_percent_of_entry() {
        let defaults = TradeDefaults::default();
        assert_eq!(defaults.default_stop_loss(dec!(250)), dec!(237.50));
        assert_eq!(defaults.default_stop_loss(dec!(100)), dec!(95.00));
    }

    #[test]
    fn test_quote_settings_defaults() {
        let quotes = QuoteSettings::default();
        assert_eq!(quotes.cache_ttl_secs, 300);
        assert!(quotes.base_url.starts_with("https://"));
    }
}
