//! Symbols domain models.

use serde::{Deserialize, Serialize};
use stockproxy_market_data::ExchangeSymbol;

use crate::errors::{Result, ValidationError};

/// Domain model representing a tradable symbol of the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub symbol: String,
    pub display_symbol: String,
    pub description: String,
    pub exchange: String,
    pub currency: Option<String>,
    pub mic: Option<String>,
    pub figi: Option<String>,
    pub symbol_type: Option<String>,
}

impl Symbol {
    /// Catalog entry for a provider listing of `exchange`.
    pub fn from_listing(listing: ExchangeSymbol, exchange: &str) -> Self {
        Self {
            symbol: listing.symbol,
            display_symbol: listing.display_symbol,
            description: listing.description,
            exchange: exchange.to_string(),
            currency: listing.currency,
            mic: listing.mic,
            figi: listing.figi,
            symbol_type: listing.symbol_type,
        }
    }
}

/// Zero-based page request with an optional free-text term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub term: Option<String>,
}

impl PageRequest {
    pub fn new(page: i64, size: i64, term: Option<String>) -> Self {
        Self { page, size, term }
    }

    /// The search term, or `None` when absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        self.term.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Number of matches skipped before this page. Call `validate` first.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "page must be zero or positive, got {}",
                self.page
            ))
            .into());
        }
        if self.size <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "size must be positive, got {}",
                self.size
            ))
            .into());
        }
        if self.page.checked_mul(self.size).is_none() {
            return Err(ValidationError::InvalidInput(format!(
                "page {} with size {} is out of range",
                self.page, self.size
            ))
            .into());
        }
        Ok(())
    }
}

/// One window of a filtered, ordered result set.
///
/// `total` counts every match, not only the items of this page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            size: request.size,
        }
    }
}

/// Outcome of the catalog warm-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum CatalogLoad {
    /// The catalog already had entries; nothing was fetched.
    Skipped { existing: i64 },
    /// The catalog was empty and has been filled.
    Loaded { inserted: usize },
}
