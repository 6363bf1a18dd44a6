use stockproxy_server::{
    api::app_router, build_state, config::Config, init_tracing, scheduler, spawn_catalog_loader,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config).await?;

    spawn_catalog_loader(state.clone(), config.catalog_exchange.clone());
    if let Some(every) = config.history_interval {
        scheduler::start_history_scheduler(state.clone(), every, config.history_symbols.clone());
    }

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
