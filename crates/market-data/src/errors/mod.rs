//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to an upstream market data provider.
///
/// No variant is retried by this crate; callers decide what to do with them.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider does not know the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The request could not be completed: connection failure or a non-2xx answer.
    #[error("Upstream unavailable: {provider} - {message}")]
    UpstreamUnavailable {
        /// The provider that failed
        provider: String,
        /// What went wrong
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered 2xx but the body does not match the expected schema.
    #[error("Malformed upstream response: {provider} - {message}")]
    UpstreamMalformed {
        /// The provider that sent the body
        provider: String,
        /// Parse or mapping failure
        message: String,
    },
}
