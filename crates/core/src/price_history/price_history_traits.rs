use async_trait::async_trait;

use super::price_history_model::{CaptureSummary, NewPriceHistoryEntry, PriceHistoryEntry};
use crate::errors::Result;

/// Trait for price history repository operations
#[async_trait]
pub trait PriceHistoryRepositoryTrait: Send + Sync {
    /// Appends rows; returns the number written.
    async fn append(&self, entries: Vec<NewPriceHistoryEntry>) -> Result<usize>;

    /// Newest first, at most `limit` rows.
    fn get_by_symbol(&self, symbol: &str, limit: i64) -> Result<Vec<PriceHistoryEntry>>;
}

/// Trait for price history service operations
#[async_trait]
pub trait PriceHistoryServiceTrait: Send + Sync {
    /// Fetches quotes for `symbols` and stores every successful one.
    async fn capture(&self, symbols: &[String]) -> Result<CaptureSummary>;

    fn get_history(&self, symbol: &str, limit: Option<i64>) -> Result<Vec<PriceHistoryEntry>>;
}
