use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use log::debug;
use stockproxy_core::symbols::{Page, PageRequest, Symbol, SymbolRepositoryTrait};
use stockproxy_core::Result;

use super::model::SymbolDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::symbols;

/// Rows per INSERT statement, well under SQLite's bound-variable limit.
const INSERT_CHUNK_SIZE: usize = 500;

const LIKE_ESCAPE: char = '\\';

pub struct SymbolRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SymbolRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SymbolRepository { pool, writer }
    }
}

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Base query shared by the count and the page so both see the same matches.
/// SQLite's LIKE is case-insensitive for ASCII.
fn filtered_symbols(term: Option<&str>) -> symbols::BoxedQuery<'static, Sqlite> {
    let mut query = symbols::table.into_boxed();
    if let Some(term) = term {
        let pattern = format!("%{}%", escape_like(term));
        query = query.filter(
            symbols::symbol
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(symbols::display_symbol.like(pattern).escape(LIKE_ESCAPE)),
        );
    }
    query
}

#[async_trait]
impl SymbolRepositoryTrait for SymbolRepository {
    fn count_symbols(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = symbols::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    fn search_symbols(&self, request: &PageRequest) -> Result<Page<Symbol>> {
        let mut conn = get_connection(&self.pool)?;
        let term = request.search_term();

        let total = filtered_symbols(term)
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;

        let rows = filtered_symbols(term)
            .select(SymbolDB::as_select())
            .order(symbols::symbol.asc())
            .limit(request.size)
            .offset(request.offset())
            .load::<SymbolDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(Page::new(
            rows.into_iter().map(Symbol::from).collect(),
            total,
            request,
        ))
    }

    async fn insert_symbols(&self, new_symbols: Vec<Symbol>) -> Result<usize> {
        let rows: Vec<SymbolDB> = new_symbols.into_iter().map(SymbolDB::from).collect();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    // Upstream listings may repeat a ticker; the first one wins.
                    inserted += diesel::insert_or_ignore_into(symbols::table)
                        .values(chunk)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                debug!("Inserted {} symbols", inserted);
                Ok(inserted)
            })
            .await
    }
}
