//! SQLite storage implementation for stockproxy.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `stockproxy-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the symbol catalog and price history
//!
//! ```text
//! core (domain, traits)
//!        │
//!        ▼
//! storage-sqlite (this crate)
//!        │
//!        ▼
//!    SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod price_history;
pub mod symbols;

// Re-export database utilities
pub use db::{
    check_connection, create_pool, get_connection, init, run_migrations, spawn_writer,
    DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use price_history::PriceHistoryRepository;
pub use symbols::SymbolRepository;

// Re-export from stockproxy-core for convenience
pub use stockproxy_core::errors::{DatabaseError, Error, Result};
