//! Launcher binary: starts the API server and the dashboard watch loop,
//! then waits for Ctrl-C, SIGTERM, or an Enter keypress before tearing
//! both down.

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkcast_launcher::supervisor::Supervisor;

/// Fixed delay after starting the API server. There is no readiness
/// probe; the sleep stands in for one.
const API_STARTUP_DELAY: Duration = Duration::from_secs(2);

/// Fixed delay after starting the dashboard.
const DASHBOARD_STARTUP_DELAY: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parkcast_launcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!();
    println!("{}", "=".repeat(50));
    println!("parkcast demo");
    println!("{}", "=".repeat(50));
    println!();
    println!("Starting services...");

    let mut supervisor = Supervisor::new();

    let api_bin = service_binary("parkcast-api", "PARKCAST_API_BIN");
    let dashboard_bin = service_binary("parkcast-dashboard", "PARKCAST_DASHBOARD_BIN");

    println!("Starting API server...");
    if let Err(e) = supervisor.spawn("parkcast-api", &api_bin, &[]) {
        tracing::error!(error = %e, path = %api_bin.display(), "Failed to start API server");
        std::process::exit(1);
    }
    tokio::time::sleep(API_STARTUP_DELAY).await;

    println!("Starting dashboard...");
    if let Err(e) = supervisor.spawn("parkcast-dashboard", &dashboard_bin, &["watch"]) {
        tracing::error!(error = %e, path = %dashboard_bin.display(), "Failed to start dashboard");
        supervisor.shutdown().await;
        std::process::exit(1);
    }
    tokio::time::sleep(DASHBOARD_STARTUP_DELAY).await;

    println!();
    println!("Press Enter to exit...");

    wait_for_exit().await;

    supervisor.shutdown().await;
}

/// Block until the user asks to stop: Ctrl-C, SIGTERM (Unix), or a line
/// on stdin (EOF counts, so piped input also exits cleanly).
async fn wait_for_exit() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let mut line = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C)");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM");
        }
        _ = stdin.read_line(&mut line) => {
            tracing::info!("Exit requested from prompt");
        }
    }
}

/// Locate a service binary: env override first, then next to the
/// launcher executable, finally a bare name for PATH lookup.
fn service_binary(name: &str, env_var: &str) -> PathBuf {
    if let Ok(path) = std::env::var(env_var) {
        return PathBuf::from(path);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(name);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    PathBuf::from(name)
}
