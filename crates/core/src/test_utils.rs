//! Shared mocks for service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use stockproxy_market_data::{ExchangeSymbol, MarketDataError, MarketDataProvider, Quote};

use crate::errors::DatabaseError;
use crate::price_history::{NewPriceHistoryEntry, PriceHistoryEntry, PriceHistoryRepositoryTrait};
use crate::symbols::{Page, PageRequest, Symbol, SymbolRepositoryTrait};

pub fn quote(symbol: &str, price: Decimal) -> Quote {
    Quote::new(symbol, price, Decimal::ONE, price, price, price, Utc::now())
}

/// In-memory provider. Unknown symbols fail with `SymbolNotFound`.
#[derive(Default)]
pub struct MockProvider {
    prices: HashMap<String, Decimal>,
    delays: HashMap<String, Duration>,
    symbols: Vec<ExchangeSymbol>,
    listing_fails: bool,
    pub quote_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub requested: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(symbol.to_string(), price);
        self
    }

    pub fn with_delay(mut self, symbol: &str, millis: u64) -> Self {
        self.delays
            .insert(symbol.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn with_listing(mut self, symbols: Vec<ExchangeSymbol>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(symbol.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let delay = self
            .delays
            .get(symbol)
            .copied()
            .unwrap_or(Duration::from_millis(5));
        tokio::time::sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.prices.get(symbol) {
            Some(price) => Ok(quote(symbol, *price)),
            None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }

    async fn list_symbols(&self, _exchange: &str) -> Result<Vec<ExchangeSymbol>, MarketDataError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.listing_fails {
            return Err(MarketDataError::UpstreamUnavailable {
                provider: "MOCK".to_string(),
                message: "HTTP 502 Bad Gateway".to_string(),
            });
        }
        Ok(self.symbols.clone())
    }
}

pub fn catalog_symbol(symbol: &str, display_symbol: &str) -> Symbol {
    Symbol {
        symbol: symbol.to_string(),
        display_symbol: display_symbol.to_string(),
        description: format!("{} description", symbol),
        exchange: "US".to_string(),
        currency: Some("USD".to_string()),
        mic: None,
        figi: None,
        symbol_type: Some("Common Stock".to_string()),
    }
}

/// Vec-backed catalog with the same matching rules as the SQL repository.
#[derive(Default)]
pub struct MockSymbolRepository {
    pub symbols: Mutex<Vec<Symbol>>,
    pub insert_calls: AtomicUsize,
    insert_fails: bool,
}

impl MockSymbolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(self, symbols: Vec<Symbol>) -> Self {
        *self.symbols.lock().unwrap() = symbols;
        self
    }

    pub fn with_failing_insert(mut self) -> Self {
        self.insert_fails = true;
        self
    }
}

#[async_trait]
impl SymbolRepositoryTrait for MockSymbolRepository {
    fn count_symbols(&self) -> crate::Result<i64> {
        Ok(self.symbols.lock().unwrap().len() as i64)
    }

    fn search_symbols(&self, request: &PageRequest) -> crate::Result<Page<Symbol>> {
        let needle = request.search_term().map(|t| t.to_lowercase());
        let mut matches: Vec<Symbol> = self
            .symbols
            .lock()
            .unwrap()
            .iter()
            .filter(|s| match &needle {
                Some(n) => {
                    s.symbol.to_lowercase().contains(n)
                        || s.display_symbol.to_lowercase().contains(n)
                }
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        let total = matches.len() as i64;
        let data = matches
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .collect();
        Ok(Page::new(data, total, request))
    }

    async fn insert_symbols(&self, symbols: Vec<Symbol>) -> crate::Result<usize> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.insert_fails {
            return Err(DatabaseError::QueryFailed("disk I/O error".to_string()).into());
        }
        let count = symbols.len();
        self.symbols.lock().unwrap().extend(symbols);
        Ok(count)
    }
}

/// Append-only history kept in insertion order.
#[derive(Default)]
pub struct MockPriceHistoryRepository {
    pub rows: Mutex<Vec<PriceHistoryEntry>>,
    pub append_calls: AtomicUsize,
    pub last_limit: Mutex<Option<i64>>,
}

impl MockPriceHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PriceHistoryRepositoryTrait for MockPriceHistoryRepository {
    async fn append(&self, entries: Vec<NewPriceHistoryEntry>) -> crate::Result<usize> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let count = entries.len();
        for entry in entries {
            let id = rows.len() as i64 + 1;
            rows.push(PriceHistoryEntry {
                id,
                symbol: entry.symbol,
                price: entry.price,
                timestamp: entry.timestamp,
            });
        }
        Ok(count)
    }

    fn get_by_symbol(&self, symbol: &str, limit: i64) -> crate::Result<Vec<PriceHistoryEntry>> {
        *self.last_limit.lock().unwrap() = Some(limit);
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|row| row.symbol == symbol)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
