//! Quote lookup for the position sizer.
//!
//! A [`QuoteSource`](sizer_core::QuoteSource) implementation over the Yahoo
//! Finance chart API, a TTL cache keyed by symbol, and a service that
//! combines the two with never-fatal fallback semantics.

mod cache;
mod service;
mod yahoo;

pub use cache::QuoteCache;
pub use service::QuoteService;
pub use yahoo::YahooQuoteSource;
