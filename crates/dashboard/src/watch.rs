//! Continuous overview refresh.
//!
//! Used as the long-running dashboard process under the launcher: fetch
//! the current forecast on a fixed interval and re-render until
//! interrupted. A failed fetch is reported and the loop keeps going, so
//! a restarting API server picks back up on the next tick.

use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use crate::client::ApiClient;
use crate::render;

/// Refresh the overview every `interval` until Ctrl-C.
pub async fn run(client: &ApiClient, interval: Duration) -> Result<()> {
    let mut ticker = tokio::time::interval(interval);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!("Received Ctrl-C, stopping watch loop");
                break;
            }
            _ = ticker.tick() => {
                match client.forecast_current().await {
                    Ok(forecast) => {
                        println!("--- {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));
                        print!("{}", render::render_overview(&forecast));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Connection to server failed");
                    }
                }
            }
        }
    }

    Ok(())
}
