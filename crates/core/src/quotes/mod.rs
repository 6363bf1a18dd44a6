//! Quotes module - latest quotes and the multi-symbol fan-out.
//!
//! ```text
//! QuoteService → MarketDataProvider (market-data crate)
//!      ↓
//! QuoteBatch { quotes (sorted by symbol), failures (input order) }
//! ```

mod quotes_model;
mod quotes_service;
mod quotes_traits;


pub use quotes_model::{Quote, QuoteBatch, QuoteFailure};
pub use quotes_service::{split_symbols, QuoteService};
pub use quotes_traits::QuoteServiceTrait;
