//! Background scheduler for periodic price history capture.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Starts capturing quotes for `symbols` every `every`. The first capture
/// runs immediately.
pub fn start_history_scheduler(
    state: Arc<AppState>,
    every: Duration,
    symbols: Vec<String>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "History scheduler started ({:?} interval, {} symbols)",
            every,
            symbols.len()
        );

        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            run_scheduled_capture(&state, &symbols).await;
        }
    })
}

async fn run_scheduled_capture(state: &Arc<AppState>, symbols: &[String]) {
    match state.price_history_service.capture(symbols).await {
        Ok(summary) => {
            info!(
                "Scheduled history capture: {} recorded, {} failed",
                summary.recorded,
                summary.failures.len()
            );
        }
        Err(e) => warn!("Scheduled history capture failed: {}", e),
    }
}
