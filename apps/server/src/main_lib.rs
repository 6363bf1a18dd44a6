use std::sync::Arc;

use stockproxy_core::{
    price_history::{PriceHistoryService, PriceHistoryServiceTrait},
    quotes::{QuoteService, QuoteServiceTrait},
    symbols::{CatalogLoad, SymbolService, SymbolServiceTrait},
};
use stockproxy_market_data::{FinnhubConfig, FinnhubProvider, MarketDataProvider};
use stockproxy_storage_sqlite::{
    db::{self, DbPool},
    PriceHistoryRepository, SymbolRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub symbol_service: Arc<dyn SymbolServiceTrait>,
    pub price_history_service: Arc<dyn PriceHistoryServiceTrait>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SP_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    if config.finnhub_token.is_empty() {
        tracing::warn!("SP_FINNHUB_TOKEN is not set; upstream requests will be rejected");
    }
    let provider: Arc<dyn MarketDataProvider> = Arc::new(FinnhubProvider::new(FinnhubConfig {
        base_url: config.finnhub_base_url.clone(),
        api_key: config.finnhub_token.clone(),
        timeout: config.upstream_timeout,
    }));

    let symbol_repository = Arc::new(SymbolRepository::new(pool.clone(), writer.clone()));
    let price_history_repository =
        Arc::new(PriceHistoryRepository::new(pool.clone(), writer.clone()));

    let quote_service: Arc<dyn QuoteServiceTrait> =
        Arc::new(QuoteService::new(provider.clone()));
    let symbol_service: Arc<dyn SymbolServiceTrait> =
        Arc::new(SymbolService::new(symbol_repository, provider));
    let price_history_service: Arc<dyn PriceHistoryServiceTrait> = Arc::new(
        PriceHistoryService::new(price_history_repository, quote_service.clone()),
    );

    Ok(Arc::new(AppState {
        quote_service,
        symbol_service,
        price_history_service,
        pool,
    }))
}

/// Fills an empty symbol catalog in the background. Failures are logged only.
pub fn spawn_catalog_loader(state: Arc<AppState>, exchange: String) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match state.symbol_service.load_if_empty(&exchange).await {
            Ok(CatalogLoad::Loaded { inserted }) => {
                tracing::info!("Symbol catalog loaded: {} symbols for {}", inserted, exchange)
            }
            Ok(CatalogLoad::Skipped { existing }) => {
                tracing::info!("Symbol catalog already populated ({} symbols)", existing)
            }
            Err(e) => tracing::error!("Symbol catalog load failed for {}: {}", exchange, e),
        }
    })
}
