//! Finnhub market data provider implementation.
//!
//! This module provides market data from Finnhub API:
//! - Latest quotes via /quote endpoint
//! - Exchange symbol listings via /stock/symbol endpoint
//!
//! The API token is sent as the `token` query parameter.
//! API documentation: https://finnhub.io/docs/api

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{ExchangeSymbol, Quote};
use crate::provider::MarketDataProvider;

pub const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER_ID: &str = "FINNHUB";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /quote endpoint
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    /// Current price
    c: Option<f64>,
    /// Percent change
    dp: Option<f64>,
    /// High price of the day
    h: Option<f64>,
    /// Low price of the day
    l: Option<f64>,
    /// Open price of the day
    o: Option<f64>,
    // Note: d (change), pc (previous close), t (timestamp) exist but not used
}

/// Item of the /stock/symbol array
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolItem {
    symbol: String,
    display_symbol: Option<String>,
    description: Option<String>,
    currency: Option<String>,
    mic: Option<String>,
    figi: Option<String>,
    #[serde(rename = "type")]
    security_type: Option<String>,
}

/// Error response from Finnhub
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Connection settings for [`FinnhubProvider`].
#[derive(Clone, Debug)]
pub struct FinnhubConfig {
    /// API root, without trailing slash (e.g., "https://finnhub.io/api/v1")
    pub base_url: String,
    pub api_key: String,
    /// Per-request timeout covering connect, send and body read
    pub timeout: Duration,
}

impl FinnhubConfig {
    /// Settings for the public Finnhub API with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ============================================================================
// FinnhubProvider
// ============================================================================

/// Finnhub market data provider.
pub struct FinnhubProvider {
    client: Client,
    config: FinnhubConfig,
}

impl FinnhubProvider {
    /// Create a new Finnhub provider from its connection settings.
    pub fn new(config: FinnhubConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Finnhub client build failed ({}); using defaults without the {:?} timeout",
                    e, config.timeout
                );
                Client::new()
            });

        Self { client, config }
    }

    /// Make a GET request to the Finnhub API and return the raw body.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);

        debug!("Finnhub request: {} with {} params", endpoint, params.len());

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("token", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(e, "Request failed"))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Try to parse error message
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(error_msg) = error_resp.error {
                    return Err(MarketDataError::UpstreamUnavailable {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("HTTP {} - {}", status, error_msg),
                    });
                }
            }

            return Err(MarketDataError::UpstreamUnavailable {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(e, "Failed to read response"))
    }

    /// Fetch latest quote from /quote endpoint.
    async fn fetch_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [("symbol", symbol)];
        let text = self.fetch("/quote", &params).await?;
        let captured_at = Utc::now();

        let response: QuoteResponse =
            serde_json::from_str(&text).map_err(|e| malformed(format!("Failed to parse quote response: {}", e)))?;

        map_quote(symbol, response, captured_at)
    }

    /// Fetch the symbol listing from /stock/symbol endpoint.
    async fn fetch_symbols(&self, exchange: &str) -> Result<Vec<ExchangeSymbol>, MarketDataError> {
        let params = [("exchange", exchange)];
        let text = self.fetch("/stock/symbol", &params).await?;

        let items: Vec<SymbolItem> = serde_json::from_str(&text)
            .map_err(|e| malformed(format!("Failed to parse symbol response: {}", e)))?;

        let symbols: Vec<ExchangeSymbol> = items.into_iter().map(ExchangeSymbol::from).collect();

        debug!("Finnhub: listed {} symbols for exchange '{}'", symbols.len(), exchange);

        Ok(symbols)
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for FinnhubProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        debug!("Fetching latest quote for {} from Finnhub", symbol);
        self.fetch_latest_quote(symbol).await
    }

    async fn list_symbols(&self, exchange: &str) -> Result<Vec<ExchangeSymbol>, MarketDataError> {
        debug!("Fetching symbol list for exchange {} from Finnhub", exchange);
        self.fetch_symbols(exchange).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn transport_error(error: reqwest::Error, context: &str) -> MarketDataError {
    if error.is_timeout() {
        MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else {
        MarketDataError::UpstreamUnavailable {
            provider: PROVIDER_ID.to_string(),
            message: format!("{}: {}", context, error),
        }
    }
}

fn malformed(message: String) -> MarketDataError {
    MarketDataError::UpstreamMalformed {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

/// Map a /quote body onto a [`Quote`] stamped with `captured_at`.
fn map_quote(
    symbol: &str,
    response: QuoteResponse,
    captured_at: DateTime<Utc>,
) -> Result<Quote, MarketDataError> {
    // Finnhub returns zeros for unknown symbols instead of an error
    if response.c == Some(0.0) && response.o.unwrap_or(0.0) == 0.0 {
        return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
    }

    Ok(Quote::new(
        symbol,
        required_decimal("c", response.c)?,
        required_decimal("dp", response.dp)?,
        required_decimal("h", response.h)?,
        required_decimal("l", response.l)?,
        required_decimal("o", response.o)?,
        captured_at,
    ))
}

fn required_decimal(field: &str, value: Option<f64>) -> Result<Decimal, MarketDataError> {
    let value = value.ok_or_else(|| malformed(format!("missing field `{}`", field)))?;
    Decimal::try_from(value).map_err(|_| malformed(format!("invalid number for `{}`: {}", field, value)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<SymbolItem> for ExchangeSymbol {
    fn from(item: SymbolItem) -> Self {
        let display_symbol = non_empty(item.display_symbol).unwrap_or_else(|| item.symbol.clone());
        Self {
            symbol: item.symbol,
            display_symbol,
            description: item.description.unwrap_or_default(),
            currency: non_empty(item.currency),
            mic: non_empty(item.mic),
            figi: non_empty(item.figi),
            symbol_type: non_empty(item.security_type),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
