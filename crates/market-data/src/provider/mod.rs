//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Concrete provider implementations (Finnhub)
//!
//! Providers are stateless apart from their HTTP client and injected
//! configuration, so a single instance can serve any number of concurrent
//! requests.

mod traits;

pub mod finnhub;

pub use traits::MarketDataProvider;
