//! Stockproxy Market Data Crate
//!
//! Upstream adapters that fetch quotes and exchange symbol listings from a
//! third-party market data provider and normalize them into provider-agnostic
//! records.
//!
//! # Core Types
//!
//! - [`Quote`] - A point-in-time price snapshot for one ticker
//! - [`ExchangeSymbol`] - One entry of an exchange's symbol listing
//! - [`MarketDataProvider`] - The adapter seam implemented by each provider
//! - [`FinnhubProvider`] - The Finnhub implementation, configured via [`FinnhubConfig`]

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{ExchangeSymbol, Quote};
pub use provider::finnhub::{FinnhubConfig, FinnhubProvider};
pub use provider::MarketDataProvider;
