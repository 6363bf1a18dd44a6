use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stockproxy_core::constants::DEFAULT_CATALOG_EXCHANGE;
use stockproxy_market_data::provider::finnhub::{BASE_URL, DEFAULT_TIMEOUT};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub finnhub_token: String,
    pub finnhub_base_url: String,
    pub upstream_timeout: Duration,
    pub catalog_exchange: String,
    pub history_symbols: Vec<String>,
    /// `None` disables the history capture scheduler.
    pub history_interval: Option<Duration>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key}: {raw}")),
        Err(_) => Ok(default),
    }
}

fn env_millis(key: &str, default: u64) -> anyhow::Result<Duration> {
    positive_millis(key, env_u64(key, default)?)
}

fn positive_millis(key: &str, millis: u64) -> anyhow::Result<Duration> {
    anyhow::ensure!(millis > 0, "Invalid {key}: must be greater than 0");
    Ok(Duration::from_millis(millis))
}

fn env_list(key: &str, default: &str) -> Vec<String> {
    env_or(key, default)
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("SP_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid SP_LISTEN_ADDR")?;
        let db_path = env_or("SP_DB_PATH", "./db/stockproxy.db");
        let cors_allow = env_list("SP_CORS_ALLOW_ORIGINS", "*");
        let request_timeout = env_millis("SP_REQUEST_TIMEOUT_MS", 30_000)?;
        let upstream_timeout =
            env_millis("SP_UPSTREAM_TIMEOUT_MS", DEFAULT_TIMEOUT.as_millis() as u64)?;
        let history_interval_secs = env_u64("SP_HISTORY_INTERVAL_SECS", 0)?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout,
            finnhub_token: env_or("SP_FINNHUB_TOKEN", ""),
            finnhub_base_url: env_or("SP_FINNHUB_BASE_URL", BASE_URL),
            upstream_timeout,
            catalog_exchange: env_or("SP_CATALOG_EXCHANGE", DEFAULT_CATALOG_EXCHANGE),
            history_symbols: env_list("SP_HISTORY_SYMBOLS", "AAPL,GOOG,MSFT"),
            history_interval: (history_interval_secs > 0)
                .then(|| Duration::from_secs(history_interval_secs)),
        })
    }
}
