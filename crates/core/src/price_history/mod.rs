//! Price history module - timestamped quote snapshots per symbol.

mod price_history_model;
mod price_history_service;
mod price_history_traits;


pub use price_history_model::{CaptureSummary, NewPriceHistoryEntry, PriceHistoryEntry};
pub use price_history_service::PriceHistoryService;
pub use price_history_traits::{PriceHistoryRepositoryTrait, PriceHistoryServiceTrait};
