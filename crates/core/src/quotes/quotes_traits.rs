use async_trait::async_trait;

use super::quotes_model::{Quote, QuoteBatch};
use crate::errors::Result;

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Latest quote for one symbol; upstream errors are returned unchanged.
    async fn get_quote(&self, symbol: &str) -> Result<Quote>;

    /// Latest quotes for many symbols, fetched concurrently.
    ///
    /// Never fails as a whole: per-symbol errors end up in `QuoteBatch::failures`.
    async fn fetch_quotes(&self, symbols: &[String]) -> QuoteBatch;
}
