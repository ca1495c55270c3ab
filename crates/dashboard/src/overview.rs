//! Current-forecast overview.

use anyhow::Result;

use crate::client::ApiClient;
use crate::render;

/// Fetch and print the single-date forecast summary.
pub async fn run(client: &ApiClient, raw: bool) -> Result<()> {
    let forecast = client.forecast_current().await?;
    print!("{}", render::render_overview(&forecast));

    if raw {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    }

    Ok(())
}
