//! SQLite storage implementation for the symbol catalog.

mod model;
mod repository;

pub use model::SymbolDB;
pub use repository::SymbolRepository;
