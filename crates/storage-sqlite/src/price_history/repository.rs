use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use stockproxy_core::price_history::{
    NewPriceHistoryEntry, PriceHistoryEntry, PriceHistoryRepositoryTrait,
};
use stockproxy_core::Result;

use super::model::{NewPriceHistoryDB, PriceHistoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::price_history;
use crate::schema::price_history::dsl::*;

pub struct PriceHistoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PriceHistoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PriceHistoryRepository { pool, writer }
    }
}

#[async_trait]
impl PriceHistoryRepositoryTrait for PriceHistoryRepository {
    async fn append(&self, entries: Vec<NewPriceHistoryEntry>) -> Result<usize> {
        let rows: Vec<NewPriceHistoryDB> = entries.into_iter().map(NewPriceHistoryDB::from).collect();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::insert_into(price_history::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn get_by_symbol(&self, symbol_filter: &str, max_rows: i64) -> Result<Vec<PriceHistoryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = price_history
            .filter(symbol.eq(symbol_filter))
            .order((timestamp.desc(), id.desc()))
            .limit(max_rows)
            .select(PriceHistoryDB::as_select())
            .load::<PriceHistoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PriceHistoryEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, PriceHistoryRepository) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.db");
        let path = init(path.to_str().unwrap()).unwrap();
        let pool = create_pool(&path).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer(pool.clone());
        (dir, PriceHistoryRepository::new(pool, writer))
    }

    fn entry(ticker: &str, minutes: i64, value: rust_decimal::Decimal) -> NewPriceHistoryEntry {
        let base = Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap();
        NewPriceHistoryEntry {
            symbol: ticker.to_string(),
            price: value,
            timestamp: base + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn test_append_and_read_newest_first() {
        let (_dir, repo) = setup();
        let written = repo
            .append(vec![
                entry("AAPL", 0, dec!(150.00)),
                entry("AAPL", 10, dec!(151.50)),
                entry("MSFT", 5, dec!(410.10)),
                entry("AAPL", 5, dec!(150.75)),
            ])
            .await
            .unwrap();
        assert_eq!(written, 4);

        let history = repo.get_by_symbol("AAPL", 100).unwrap();
        let prices: Vec<_> = history.iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![dec!(151.50), dec!(150.75), dec!(150.00)]);
        assert!(history.iter().all(|e| e.symbol == "AAPL"));
    }

    #[tokio::test]
    async fn test_limit_and_tie_break_on_id() {
        let (_dir, repo) = setup();
        repo.append(vec![entry("AAPL", 0, dec!(1))]).await.unwrap();
        repo.append(vec![entry("AAPL", 0, dec!(2))]).await.unwrap();
        repo.append(vec![entry("AAPL", 0, dec!(3))]).await.unwrap();

        let history = repo.get_by_symbol("AAPL", 2).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].price, dec!(3));
        assert_eq!(history[1].price, dec!(2));
        assert!(history[0].id > history[1].id);
    }

    #[tokio::test]
    async fn test_unknown_symbol_has_no_history() {
        let (_dir, repo) = setup();
        repo.append(vec![entry("AAPL", 0, dec!(1))]).await.unwrap();
        assert!(repo.get_by_symbol("aapl", 10).unwrap().is_empty());
        assert!(repo.get_by_symbol("GOOG", 10).unwrap().is_empty());
    }
}
