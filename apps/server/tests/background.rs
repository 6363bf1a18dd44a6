mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::TestApp;
use stockproxy_server::{scheduler::start_history_scheduler, spawn_catalog_loader};

#[tokio::test]
async fn catalog_loader_fills_empty_catalog() {
    let app = TestApp::spawn().await;

    spawn_catalog_loader(app.state.clone(), "US".to_string())
        .await
        .unwrap();

    let (status, body) = app.get("/api/stocks/symbols?size=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 14);
}

#[tokio::test]
async fn catalog_loader_failure_leaves_service_up() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let app = TestApp::spawn_with(|config| {
        config.finnhub_base_url = format!("http://{addr}");
    })
    .await;

    spawn_catalog_loader(app.state.clone(), "US".to_string())
        .await
        .unwrap();

    let (status, body) = app.get("/api/stocks/symbols").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn history_scheduler_records_watchlist() {
    let app = TestApp::spawn().await;

    let handle = start_history_scheduler(
        app.state.clone(),
        Duration::from_millis(50),
        vec!["AAPL".to_string(), "MSFT".to_string()],
    );

    let mut recorded = Vec::new();
    for _ in 0..40 {
        let (_, aapl) = app.get("/api/stocks/AAPL/history").await;
        let (_, msft) = app.get("/api/stocks/MSFT/history").await;
        recorded = vec![
            aapl.as_array().map_or(0, Vec::len),
            msft.as_array().map_or(0, Vec::len),
        ];
        if recorded.iter().all(|n| *n >= 2) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    handle.abort();

    assert!(recorded.iter().all(|n| *n >= 2), "recorded: {recorded:?}");

    let (_, goog) = app.get("/api/stocks/GOOG/history").await;
    assert_eq!(goog.as_array().unwrap().len(), 0);
}
