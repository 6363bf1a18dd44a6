use async_trait::async_trait;

use super::symbols_model::{CatalogLoad, Page, PageRequest, Symbol};
use crate::errors::Result;

/// Trait for symbol catalog repository operations
#[async_trait]
pub trait SymbolRepositoryTrait: Send + Sync {
    fn count_symbols(&self) -> Result<i64>;

    /// Count and page window of the entries matching `request.search_term()`,
    /// ordered by symbol ascending. Both must come from the same predicate.
    fn search_symbols(&self, request: &PageRequest) -> Result<Page<Symbol>>;

    /// Bulk insert; returns the number of rows written.
    async fn insert_symbols(&self, symbols: Vec<Symbol>) -> Result<usize>;
}

/// Trait for symbol catalog service operations
#[async_trait]
pub trait SymbolServiceTrait: Send + Sync {
    fn search_symbols(&self, request: &PageRequest) -> Result<Page<Symbol>>;

    /// Fill the catalog from the provider listing of `exchange` when it is empty.
    async fn load_if_empty(&self, exchange: &str) -> Result<CatalogLoad>;
}
