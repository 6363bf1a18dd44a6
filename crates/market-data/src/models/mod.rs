//! Provider-agnostic market data models.

mod quote;
mod symbol;

pub use quote::Quote;
pub use symbol::ExchangeSymbol;
