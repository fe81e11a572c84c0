//! Yahoo Finance quote source.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use sizer_core::error::LookupError;
use sizer_core::traits::QuoteSource;
use sizer_core::types::QuoteInfo;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Quote source backed by the Yahoo Finance v8 chart endpoint.
///
/// Asks for two days of daily bars and takes the last close, which matches
/// what the quote is used for: pre-filling the entry price.
pub struct YahooQuoteSource {
    client: Client,
    base_url: String,
}

/// Chart API response types
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    symbol: String,
    regular_market_price: Option<f64>,
    long_name: Option<String>,
    short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<IndicatorQuote>,
}

#[derive(Debug, Deserialize)]
struct IndicatorQuote {
    close: Option<Vec<Option<f64>>>,
}

impl YahooQuoteSource {
    /// Create a source against the public Yahoo endpoint.
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Create a source against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("sizer/0.1")
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?range=2d&interval=1d",
            self.base_url, symbol
        )
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    async fn latest_quote(&self, symbol: &str) -> Result<Option<QuoteInfo>, LookupError> {
        let symbol = symbol.to_uppercase();
        let url = self.chart_url(&symbol);
        debug!(symbol = %symbol, url = %url, "fetching quote");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        // Unknown symbols come back as 404 with an error body
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::SymbolNotFound(symbol));
        }
        if !response.status().is_success() {
            return Err(LookupError::Network(format!(
                "quote request for {} failed with status {}",
                symbol,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_chart_response(&symbol, &body)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

/// Parse a chart API body into a quote.
///
/// Close price: last non-null close from the indicators block, falling back
/// to the meta's regular market price. Company name: long name, then short
/// name. `Ok(None)` when the result exists but carries no usable price.
fn parse_chart_response(symbol: &str, body: &str) -> Result<Option<QuoteInfo>, LookupError> {
    let parsed: ChartResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    if let Some(error) = parsed.chart.error {
        return Err(LookupError::SymbolNotFound(format!(
            "{}: {} ({})",
            symbol, error.description, error.code
        )));
    }

    let result = parsed
        .chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| {
            LookupError::InvalidResponse(format!("no chart result for {}", symbol))
        })?;

    let last_close = result
        .indicators
        .as_ref()
        .and_then(|ind| ind.quote.first())
        .and_then(|q| q.close.as_ref())
        .and_then(|closes| closes.iter().rev().find_map(|c| *c))
        .or(result.meta.regular_market_price);

    let Some(price) = last_close else {
        return Ok(None);
    };

    let last_close = Decimal::from_f64(price)
        .ok_or_else(|| LookupError::Parse(format!("close price {} not representable", price)))?;

    let company_name = result.meta.long_name.or(result.meta.short_name);

    Ok(Some(QuoteInfo {
        symbol: result.meta.symbol,
        last_close,
        company_name,
        fetched_at: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "TSLA",
                        "regularMarketPrice": 251.3,
                        "longName": "Tesla, Inc.",
                        "shortName": "Tesla"
                    },
                    "timestamp": [1700000000, 1700086400],
                    "indicators": {
                        "quote": [{"close": [248.5, 250.25]}]
                    }
                }],
                "error": null
            }
        }"#;

        let quote = parse_chart_response("TSLA", body).unwrap().unwrap();
        assert_eq!(quote.symbol, "TSLA");
        assert_eq!(quote.last_close, dec!(250.25));
        assert_eq!(quote.company_name.as_deref(), Some("Tesla, Inc."));
    }

    #[test]
    fn test_parse_skips_null_closes() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "TSLA", "regularMarketPrice": 251.3},
                    "indicators": {"quote": [{"close": [249.0, null]}]}
                }],
                "error": null
            }
        }"#;

        let quote = parse_chart_response("TSLA", body).unwrap().unwrap();
        assert_eq!(quote.last_close, dec!(249));
        assert!(quote.company_name.is_none());
    }

    #[test]
    fn test_parse_falls_back_to_market_price() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "TSLA", "regularMarketPrice": 251.5},
                    "indicators": {"quote": [{"close": []}]}
                }],
                "error": null
            }
        }"#;

        let quote = parse_chart_response("TSLA", body).unwrap().unwrap();
        assert_eq!(quote.last_close, dec!(251.5));
    }

    #[test]
    fn test_parse_error_object_is_symbol_not_found() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;

        let err = parse_chart_response("ZZZZ", body).unwrap_err();
        assert!(matches!(err, LookupError::SymbolNotFound(_)));
    }

    #[test]
    fn test_parse_no_price_is_absent() {
        let body = r#"{
            "chart": {
                "result": [{"meta": {"symbol": "ZZZZ"}}],
                "error": null
            }
        }"#;

        assert!(parse_chart_response("ZZZZ", body).unwrap().is_none());
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let err = parse_chart_response("TSLA", "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }
}
