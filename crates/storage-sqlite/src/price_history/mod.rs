//! SQLite storage implementation for price history.

mod model;
mod repository;

pub use model::{NewPriceHistoryDB, PriceHistoryDB};
pub use repository::PriceHistoryRepository;
