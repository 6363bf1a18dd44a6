use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockproxy_core::{
    constants::DEFAULT_PAGE_SIZE,
    errors::{Error as CoreError, ValidationError},
    price_history::PriceHistoryEntry,
    quotes::{split_symbols, Quote, QuoteBatch},
    symbols::{Page, PageRequest, Symbol},
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct PricesQuery {
    symbols: Option<String>,
}

#[derive(Deserialize)]
struct SymbolsQuery {
    page: Option<i64>,
    size: Option<i64>,
    q: Option<String>,
}

#[derive(Deserialize)]
struct HistoryQuery {
    limit: Option<i64>,
}

async fn get_price(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Quote>> {
    let Path(symbol) = path?;
    let quote = state.quote_service.get_quote(&symbol).await?;
    Ok(Json(quote))
}

async fn get_prices(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PricesQuery>, QueryRejection>,
) -> ApiResult<Json<QuoteBatch>> {
    let Query(query) = query?;
    let raw = query
        .symbols
        .ok_or_else(|| CoreError::from(ValidationError::MissingField("symbols".to_string())))?;
    let batch = state
        .quote_service
        .fetch_quotes(&split_symbols(&raw))
        .await;
    Ok(Json(batch))
}

async fn search_symbols(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SymbolsQuery>, QueryRejection>,
) -> ApiResult<Json<Page<Symbol>>> {
    let Query(query) = query?;
    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        query.q,
    );
    let page = state.symbol_service.search_symbols(&request)?;
    Ok(Json(page))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PriceHistoryEntry>>> {
    let Path(symbol) = path?;
    let Query(query) = query?;
    let history = state
        .price_history_service
        .get_history(&symbol, query.limit)?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/symbols", get(search_symbols))
        .route("/{symbol}/price", get(get_price))
        .route("/{symbol}/history", get(get_history))
}
