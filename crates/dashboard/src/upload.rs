//! File upload flow with progress polling.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::client::{ApiClient, ProgressReply};
use crate::render;

/// Fixed poll interval while waiting for processing to finish.
const POLL_INTERVAL: Duration = Duration::from_millis(1500);

/// Width of the rendered progress bar.
const BAR_WIDTH: usize = 20;

/// Upload `path` and poll the session until it reaches the terminal
/// phase. Any error -- transport, HTTP, or an error payload -- halts the
/// flow; nothing is retried.
pub async fn run(client: &ApiClient, path: &Path) -> Result<()> {
    client
        .health_check()
        .await
        .context("cannot upload, server is not reachable")?;

    let session_id = client.upload(path).await?;
    println!("File uploaded. Processing... (session {session_id})");

    loop {
        tokio::time::sleep(POLL_INTERVAL).await;

        match client.progress(&session_id).await? {
            ProgressReply::Error { error } => {
                bail!("progress request failed: {error}");
            }
            ProgressReply::Status { status, message } => {
                let fraction = render::progress_fraction(&status);
                println!("{}  {message}", render::progress_bar(fraction, BAR_WIDTH));

                if status == "done" {
                    break;
                }
            }
        }
    }

    println!("Processing complete.");
    Ok(())
}
