#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    extract::Query,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use stockproxy_server::{api::app_router, build_state, config::Config, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

pub const TOKEN: &str = "test-token";

async fn fake_quote(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("token").map(String::as_str) != Some(TOKEN) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid API key" })),
        )
            .into_response();
    }
    let body = match params.get("symbol").map(String::as_str).unwrap_or_default() {
        "AAPL" => json!({ "c": 150.0, "d": 1.8, "dp": 1.2, "h": 151.0, "l": 149.0, "o": 149.5, "pc": 148.2, "t": 1_700_000_000 }),
        "GOOG" => json!({ "c": 140.5, "d": -0.5, "dp": -0.35, "h": 141.0, "l": 139.8, "o": 140.9, "pc": 141.0, "t": 1_700_000_000 }),
        "MSFT" => json!({ "c": 410.2, "d": 2.0, "dp": 0.49, "h": 412.0, "l": 405.5, "o": 406.0, "pc": 408.2, "t": 1_700_000_000 }),
        "DOWN" => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "SLOW" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            json!({ "c": 1.0, "d": 0.0, "dp": 0.0, "h": 1.0, "l": 1.0, "o": 1.0, "pc": 1.0, "t": 1_700_000_000 })
        }
        "BROKEN" => json!({ "c": 10.0 }),
        _ => json!({ "c": 0, "d": null, "dp": null, "h": 0, "l": 0, "o": 0, "pc": 0, "t": 0 }),
    };
    Json(body).into_response()
}

async fn fake_symbols() -> Json<Value> {
    let tickers = [
        "AAPL", "ABNB", "ADBE", "AMD", "AMZN", "BRK.B", "GOOG", "GOOGL", "INTC", "META", "MSFT",
        "NFLX", "NVDA", "TSLA",
    ];
    Json(Value::Array(
        tickers
            .iter()
            .map(|t| {
                json!({
                    "symbol": t,
                    "displaySymbol": t,
                    "description": format!("{t} INC"),
                    "currency": "USD",
                    "mic": "XNAS",
                    "figi": null,
                    "type": "Common Stock",
                })
            })
            .collect(),
    ))
}

async fn spawn_finnhub() -> SocketAddr {
    let app = Router::new()
        .route("/quote", get(fake_quote))
        .route("/stock/symbol", get(fake_symbols));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawns against the fake upstream after letting the caller adjust the config.
    pub async fn spawn_with(configure: impl FnOnce(&mut Config)) -> Self {
        let upstream = spawn_finnhub().await;
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            db_path: dir.path().join("test.db").to_string_lossy().to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(10),
            finnhub_token: TOKEN.to_string(),
            finnhub_base_url: format!("http://{upstream}"),
            upstream_timeout: Duration::from_secs(5),
            catalog_exchange: "US".to_string(),
            history_symbols: vec!["AAPL".to_string(), "MSFT".to_string()],
            history_interval: None,
        };
        configure(&mut config);
        let state = build_state(&config).await.unwrap();
        let router = app_router(state.clone(), &config);
        Self {
            router,
            state,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));
        (status, body)
    }
}
