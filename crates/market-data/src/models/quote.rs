use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price snapshot for a single ticker.
///
/// `timestamp` is the moment the adapter received the upstream answer,
/// not a time reported by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker the quote was requested for
    pub symbol: String,

    /// Current price
    pub price: Decimal,

    /// Change since previous close, in percent
    pub percent_change: Decimal,

    /// High price of the day
    pub high_price: Decimal,

    /// Low price of the day
    pub low_price: Decimal,

    /// Open price of the day
    pub open_price: Decimal,

    /// Capture time
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        percent_change: Decimal,
        high_price: Decimal,
        low_price: Decimal,
        open_price: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            percent_change,
            high_price,
            low_price,
            open_price,
            timestamp,
        }
    }
}
