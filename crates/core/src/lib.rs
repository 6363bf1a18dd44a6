//! Stockproxy Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the proxy: the quote fan-out,
//! the symbol catalog (search, pagination and warm-up) and the price history.
//! It is database-agnostic and defines repository traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod price_history;
pub mod quotes;
pub mod symbols;

#[cfg(test)]
mod test_utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
