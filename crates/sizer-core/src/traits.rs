//! Quote source trait definitions.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::types::QuoteInfo;

/// Trait for quote lookup sources.
///
/// `Ok(None)` means the source answered but knows nothing about the symbol;
/// `Err` means the source could not be reached or returned garbage. Callers
/// treat both as "absent" and fall back to default values.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quote for a symbol.
    async fn latest_quote(&self, symbol: &str) -> Result<Option<QuoteInfo>, LookupError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
