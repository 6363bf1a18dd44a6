//! Database models for symbols.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use stockproxy_core::symbols::Symbol;

/// Database model for catalog symbols
#[derive(
    Queryable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::symbols)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_default_value = false)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDB {
    pub symbol: String,
    pub display_symbol: String,
    pub description: String,
    pub exchange: String,
    pub currency: Option<String>,
    pub mic: Option<String>,
    pub figi: Option<String>,
    pub symbol_type: Option<String>,
}

impl From<SymbolDB> for Symbol {
    fn from(db: SymbolDB) -> Self {
        Self {
            symbol: db.symbol,
            display_symbol: db.display_symbol,
            description: db.description,
            exchange: db.exchange,
            currency: db.currency,
            mic: db.mic,
            figi: db.figi,
            symbol_type: db.symbol_type,
        }
    }
}

impl From<Symbol> for SymbolDB {
    fn from(domain: Symbol) -> Self {
        Self {
            symbol: domain.symbol,
            display_symbol: domain.display_symbol,
            description: domain.description,
            exchange: domain.exchange,
            currency: domain.currency,
            mic: domain.mic,
            figi: domain.figi,
            symbol_type: domain.symbol_type,
        }
    }
}
