//! Quotes domain models.

use serde::{Deserialize, Serialize};

pub use stockproxy_market_data::Quote;

/// A symbol whose quote could not be fetched during a fan-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFailure {
    pub symbol: String,
    pub message: String,
}

/// Merged result of a multi-symbol quote request.
///
/// `quotes` holds one entry per symbol that resolved, sorted by symbol.
/// `failures` holds one entry per symbol that did not, in request order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBatch {
    pub quotes: Vec<Quote>,
    pub failures: Vec<QuoteFailure>,
}
