use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::price_history_model::{CaptureSummary, NewPriceHistoryEntry, PriceHistoryEntry};
use super::price_history_traits::{PriceHistoryRepositoryTrait, PriceHistoryServiceTrait};
use crate::constants::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use crate::errors::{Result, ValidationError};
use crate::quotes::QuoteServiceTrait;

pub struct PriceHistoryService {
    repository: Arc<dyn PriceHistoryRepositoryTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl PriceHistoryService {
    pub fn new(
        repository: Arc<dyn PriceHistoryRepositoryTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            repository,
            quote_service,
        }
    }
}

#[async_trait]
impl PriceHistoryServiceTrait for PriceHistoryService {
    async fn capture(&self, symbols: &[String]) -> Result<CaptureSummary> {
        let batch = self.quote_service.fetch_quotes(symbols).await;
        for failure in &batch.failures {
            warn!(
                "Skipping history capture for {}: {}",
                failure.symbol, failure.message
            );
        }

        let entries: Vec<NewPriceHistoryEntry> =
            batch.quotes.iter().map(NewPriceHistoryEntry::from).collect();
        let recorded = if entries.is_empty() {
            0
        } else {
            self.repository.append(entries).await?
        };
        debug!("Recorded {} price history rows", recorded);

        Ok(CaptureSummary {
            recorded,
            failures: batch.failures,
        })
    }

    fn get_history(&self, symbol: &str, limit: Option<i64>) -> Result<Vec<PriceHistoryEntry>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(ValidationError::InvalidInput(format!(
                "limit must be between 1 and {}, got {}",
                MAX_HISTORY_LIMIT, limit
            ))
            .into());
        }
        self.repository.get_by_symbol(symbol, limit)
    }
}
