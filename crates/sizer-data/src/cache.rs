//! Quote caching.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sizer_core::types::QuoteInfo;

/// Default time-to-live for cached quotes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CachedQuote {
    quote: QuoteInfo,
    fetched_at: Instant,
}

/// In-memory TTL cache for quotes, keyed by uppercased symbol.
///
/// Expiry is checked explicitly on every read; stale entries are evicted
/// rather than returned.
pub struct QuoteCache {
    entries: HashMap<String, CachedQuote>,
    ttl: Duration,
}

impl QuoteCache {
    /// Create a cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    fn cache_key(symbol: &str) -> String {
        symbol.to_uppercase()
    }

    /// Get a cached quote if one exists and has not expired.
    pub fn get(&mut self, symbol: &str) -> Option<&QuoteInfo> {
        let key = Self::cache_key(symbol);
        let expired = match self.entries.get(&key) {
            Some(entry) => entry.fetched_at.elapsed() >= self.ttl,
            None => return None,
        };

        if expired {
            self.entries.remove(&key);
            return None;
        }
        self.entries.get(&key).map(|entry| &entry.quote)
    }

    /// Store a quote, replacing any previous entry for the symbol.
    pub fn put(&mut self, quote: QuoteInfo) {
        let key = Self::cache_key(&quote.symbol);
        self.entries.insert(
            key,
            CachedQuote {
                quote,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop the cached quote for a symbol.
    pub fn clear(&mut self, symbol: &str) {
        self.entries.remove(&Self::cache_key(symbol));
    }

    /// Drop all cached quotes.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn quote(symbol: &str) -> QuoteInfo {
        QuoteInfo {
            symbol: symbol.to_string(),
            last_close: dec!(250),
            company_name: Some("Tesla, Inc.".to_string()),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_hit_within_ttl() {
        let mut cache = QuoteCache::new(Duration::from_secs(300));
        cache.put(quote("TSLA"));

        let hit = cache.get("TSLA").expect("fresh entry");
        assert_eq!(hit.last_close, dec!(250));
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let mut cache = QuoteCache::new(Duration::from_secs(300));
        cache.put(quote("TSLA"));

        assert!(cache.get("tsla").is_some());
    }

    #[test]
    fn test_expired_entry_evicted() {
        // Zero TTL: everything is stale the moment it lands.
        let mut cache = QuoteCache::new(Duration::ZERO);
        cache.put(quote("TSLA"));

        assert!(cache.get("TSLA").is_none());
        assert!(cache.get("TSLA").is_none());
    }

    #[test]
    fn test_clear() {
        let mut cache = QuoteCache::new(Duration::from_secs(300));
        cache.put(quote("TSLA"));
        cache.put(quote("NVDA"));

        cache.clear("TSLA");
        assert!(cache.get("TSLA").is_none());
        assert!(cache.get("NVDA").is_some());

        cache.clear_all();
        assert!(cache.get("NVDA").is_none());
    }
}
