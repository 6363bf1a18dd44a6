//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ExchangeSymbol, Quote};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockproxy_market_data::{ExchangeSymbol, MarketDataError, MarketDataProvider, Quote};
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         // ...
///     }
///
///     async fn list_symbols(&self, exchange: &str) -> Result<Vec<ExchangeSymbol>, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in errors and logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a ticker.
    ///
    /// The symbol is forwarded as-is; no trimming or validation is applied.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch every symbol the provider lists for an exchange (e.g., "US").
    async fn list_symbols(&self, exchange: &str) -> Result<Vec<ExchangeSymbol>, MarketDataError>;
}
