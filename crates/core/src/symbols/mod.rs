//! Symbols module - the searchable symbol catalog and its warm-up loader.

mod symbols_model;
mod symbols_service;
mod symbols_traits;


pub use symbols_model::{CatalogLoad, Page, PageRequest, Symbol};
pub use symbols_service::SymbolService;
pub use symbols_traits::{SymbolRepositoryTrait, SymbolServiceTrait};
