//! Database models for price history.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockproxy_core::price_history::{NewPriceHistoryEntry, PriceHistoryEntry};

/// Database model for stored price observations
#[derive(Queryable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::price_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryDB {
    pub id: i64,
    pub symbol: String,
    pub price: String,
    pub timestamp: String,
}

/// Database model for appending a price observation
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::price_history)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceHistoryDB {
    pub symbol: String,
    pub price: String,
    pub timestamp: String,
}

/// Fixed-width UTC timestamps so text ordering matches time ordering.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl From<PriceHistoryDB> for PriceHistoryEntry {
    fn from(db: PriceHistoryDB) -> Self {
        let price = Decimal::from_str(&db.price).unwrap_or_else(|e| {
            warn!("Invalid stored price '{}' for row {}: {}", db.price, db.id, e);
            Decimal::ZERO
        });
        let timestamp = DateTime::parse_from_rfc3339(&db.timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|e| {
                warn!(
                    "Invalid stored timestamp '{}' for row {}: {}",
                    db.timestamp, db.id, e
                );
                DateTime::<Utc>::default()
            });
        Self {
            id: db.id,
            symbol: db.symbol,
            price,
            timestamp,
        }
    }
}

impl From<NewPriceHistoryEntry> for NewPriceHistoryDB {
    fn from(domain: NewPriceHistoryEntry) -> Self {
        Self {
            symbol: domain.symbol,
            price: domain.price.to_string(),
            timestamp: format_timestamp(&domain.timestamp),
        }
    }
}
