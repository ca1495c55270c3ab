use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use parkcast_dashboard::cli::{CliArgs, Command};
use parkcast_dashboard::client::ApiClient;
use parkcast_dashboard::{overview, timeseries, upload, watch};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let client = ApiClient::new(&args.api_url);

    match args.command.unwrap_or(Command::Overview { raw: false }) {
        Command::Overview { raw } => overview::run(&client, raw).await,
        Command::Range {
            start,
            end,
            locations,
            raw,
        } => timeseries::run(&client, start, end, locations, raw).await,
        Command::Upload { path } => upload::run(&client, &path).await,
        Command::Locations => {
            for location in client.locations().await? {
                println!("{location}");
            }
            Ok(())
        }
        Command::Watch { interval_secs } => {
            watch::run(&client, Duration::from_secs(interval_secs)).await
        }
    }
}
