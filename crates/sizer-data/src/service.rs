//! Cached quote lookup with fallback semantics.

use sizer_core::traits::QuoteSource;
use sizer_core::types::QuoteInfo;
use tracing::{debug, warn};

use crate::cache::QuoteCache;

/// A quote source combined with a TTL cache.
///
/// Lookup failure is never propagated: the caller gets `None` and continues
/// with default values. A warning is logged so the user can see why the
/// defaults appeared.
pub struct QuoteService<S: QuoteSource> {
    source: S,
    cache: QuoteCache,
}

impl<S: QuoteSource> QuoteService<S> {
    pub fn new(source: S, cache: QuoteCache) -> Self {
        Self { source, cache }
    }

    /// Latest quote for a symbol, from cache when fresh.
    ///
    /// Returns `None` when the symbol is unknown or the source failed.
    pub async fn latest(&mut self, symbol: &str) -> Option<QuoteInfo> {
        if let Some(quote) = self.cache.get(symbol) {
            debug!(symbol = %symbol, "quote served from cache");
            return Some(quote.clone());
        }

        match self.source.latest_quote(symbol).await {
            Ok(Some(quote)) => {
                self.cache.put(quote.clone());
                Some(quote)
            }
            Ok(None) => {
                warn!(symbol = %symbol, source = self.source.name(), "no quote data, using defaults");
                None
            }
            Err(e) => {
                warn!(symbol = %symbol, source = self.source.name(), error = %e, "quote lookup failed, using defaults");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use sizer_core::error::LookupError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    enum MockBehavior {
        Quote,
        Absent,
        Fail,
    }

    struct MockSource {
        behavior: MockBehavior,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuoteSource for MockSource {
        async fn latest_quote(&self, symbol: &str) -> Result<Option<QuoteInfo>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                MockBehavior::Quote => Ok(Some(QuoteInfo {
                    symbol: symbol.to_string(),
                    last_close: dec!(250),
                    company_name: Some("Tesla, Inc.".to_string()),
                    fetched_at: Utc::now(),
                })),
                MockBehavior::Absent => Ok(None),
                MockBehavior::Fail => Err(LookupError::Network("connection refused".to_string())),
            }
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_fetch_then_cache() {
        let mut service = QuoteService::new(
            MockSource::new(MockBehavior::Quote),
            QuoteCache::new(Duration::from_secs(300)),
        );

        let first = service.latest("TSLA").await.unwrap();
        let second = service.latest("TSLA").await.unwrap();

        assert_eq!(first.last_close, second.last_close);
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_cache_refetches() {
        let mut service = QuoteService::new(
            MockSource::new(MockBehavior::Quote),
            QuoteCache::new(Duration::ZERO),
        );

        service.latest("TSLA").await.unwrap();
        service.latest("TSLA").await.unwrap();

        assert_eq!(service.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_absent_symbol_is_none() {
        let mut service = QuoteService::new(
            MockSource::new(MockBehavior::Absent),
            QuoteCache::default(),
        );

        assert!(service.latest("ZZZZ").await.is_none());
    }

    #[tokio::test]
    async fn test_source_failure_is_none_not_error() {
        let mut service = QuoteService::new(
            MockSource::new(MockBehavior::Fail),
            QuoteCache::default(),
        );

        assert!(service.latest("TSLA").await.is_none());
        // Failures are not cached; the next call tries the source again
        assert!(service.latest("TSLA").await.is_none());
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 2);
    }
}
