use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Terminal dashboard for the parkcast demo services.
#[derive(Parser, Debug)]
#[command(name = "parkcast-dashboard", about = "Terminal dashboard for the parkcast demo services")]
pub struct CliArgs {
    /// Base URL of the parkcast API server.
    #[arg(long, env = "PARKCAST_API_URL", default_value = "http://127.0.0.1:8000")]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current forecast for every known location.
    Overview {
        /// Also print the raw JSON payload.
        #[arg(long)]
        raw: bool,
    },
    /// Render a per-day forecast table over a date range.
    Range {
        /// First day of the range (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the range, inclusive (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
        /// Locations to include (defaults to every known location).
        #[arg(long)]
        locations: Vec<String>,
        /// Also print the raw JSON payload.
        #[arg(long)]
        raw: bool,
    },
    /// Upload a file and follow its processing progress.
    Upload {
        /// File to upload.
        path: PathBuf,
    },
    /// List the locations the server knows about.
    Locations,
    /// Periodically refresh the overview until interrupted.
    Watch {
        /// Seconds between refreshes.
        #[arg(long, default_value = "10")]
        interval_secs: u64,
    },
}
