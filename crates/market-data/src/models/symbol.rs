//! Exchange symbol listing models.

use serde::{Deserialize, Serialize};

/// One tradable instrument as listed by a provider for an exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeSymbol {
    /// Symbol used for API calls (e.g., "AAPL")
    pub symbol: String,

    /// Display symbol (e.g., "AAPL", "BRK.B")
    pub display_symbol: String,

    /// Full name (e.g., "APPLE INC")
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Market Identifier Code of the primary listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,

    /// Security type (e.g., "Common Stock", "ETP")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_type: Option<String>,
}

impl ExchangeSymbol {
    /// Create a listing entry with only the identifying fields set.
    pub fn new(
        symbol: impl Into<String>,
        display_symbol: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_symbol: display_symbol.into(),
            description: description.into(),
            currency: None,
            mic: None,
            figi: None,
            symbol_type: None,
        }
    }
}
