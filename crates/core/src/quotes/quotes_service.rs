use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use stockproxy_market_data::MarketDataProvider;

use super::quotes_model::{Quote, QuoteBatch, QuoteFailure};
use super::quotes_traits::QuoteServiceTrait;
use crate::constants::SYMBOL_SEPARATOR;
use crate::errors::Result;

/// Split a comma separated symbol list.
///
/// Tokens are kept verbatim: no trimming, no case folding, and empty tokens
/// (from "A,,B" or a trailing comma) are preserved.
pub fn split_symbols(raw: &str) -> Vec<String> {
    raw.split(SYMBOL_SEPARATOR).map(str::to_string).collect()
}

pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        QuoteService { provider }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        Ok(self.provider.get_latest_quote(symbol).await?)
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> QuoteBatch {
        debug!(
            "Fetching {} quotes from {}",
            symbols.len(),
            self.provider.id()
        );

        // Unbounded fan-out: one in-flight request per symbol
        let results = join_all(symbols.iter().map(|symbol| async move {
            (symbol, self.provider.get_latest_quote(symbol).await)
        }))
        .await;

        let mut batch = QuoteBatch::default();
        for (symbol, result) in results {
            match result {
                Ok(quote) => batch.quotes.push(quote),
                Err(e) => {
                    warn!("Quote fetch failed for '{}': {}", symbol, e);
                    batch.failures.push(QuoteFailure {
                        symbol: symbol.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        // Stable: duplicates of one symbol keep request order
        batch.quotes.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        batch
    }
}
