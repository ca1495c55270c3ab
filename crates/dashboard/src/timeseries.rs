//! Per-day forecast tables over a date range.

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::render;

/// Fetch and print the range forecast.
///
/// Rejects inverted ranges before calling the server; the service
/// contract leaves that validation to the client.
pub async fn run(
    client: &ApiClient,
    start: NaiveDate,
    end: NaiveDate,
    locations: Vec<String>,
    raw: bool,
) -> Result<()> {
    if start > end {
        bail!("start date must be on or before end date");
    }

    let locations = if locations.is_empty() {
        client.locations().await?
    } else {
        locations
    };

    let forecast = client.forecast_range(&locations, start, end).await?;
    print!("{}", render::render_range(&forecast));

    if raw {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    }

    Ok(())
}
