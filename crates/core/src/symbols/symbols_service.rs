use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use stockproxy_market_data::MarketDataProvider;

use super::symbols_model::{CatalogLoad, Page, PageRequest, Symbol};
use super::symbols_traits::{SymbolRepositoryTrait, SymbolServiceTrait};
use crate::errors::Result;

pub struct SymbolService {
    repository: Arc<dyn SymbolRepositoryTrait>,
    provider: Arc<dyn MarketDataProvider>,
}

impl SymbolService {
    pub fn new(
        repository: Arc<dyn SymbolRepositoryTrait>,
        provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        SymbolService {
            repository,
            provider,
        }
    }
}

#[async_trait]
impl SymbolServiceTrait for SymbolService {
    fn search_symbols(&self, request: &PageRequest) -> Result<Page<Symbol>> {
        request.validate()?;
        debug!(
            "Searching symbols: term={:?} page={} size={}",
            request.search_term(),
            request.page,
            request.size
        );
        self.repository.search_symbols(request)
    }

    async fn load_if_empty(&self, exchange: &str) -> Result<CatalogLoad> {
        let existing = self.repository.count_symbols()?;
        if existing > 0 {
            debug!(
                "Symbol catalog already has {} entries, skipping load",
                existing
            );
            return Ok(CatalogLoad::Skipped { existing });
        }

        info!(
            "Symbol catalog is empty, loading exchange {} from {}",
            exchange,
            self.provider.id()
        );
        let listing = self.provider.list_symbols(exchange).await?;
        let symbols: Vec<Symbol> = listing
            .into_iter()
            .map(|s| Symbol::from_listing(s, exchange))
            .collect();

        let inserted = self.repository.insert_symbols(symbols).await?;
        info!("Loaded {} symbols for exchange {}", inserted, exchange);
        Ok(CatalogLoad::Loaded { inserted })
    }
}
