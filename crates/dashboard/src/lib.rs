//! Terminal dashboard for the parkcast services.
//!
//! A thin polling client over the API server: one module per view
//! (overview, time series, upload) plus a continuous watch mode used
//! under the launcher. All state lives on the server; this crate only
//! fetches and renders.

pub mod cli;
pub mod client;
pub mod overview;
pub mod render;
pub mod timeseries;
pub mod upload;
pub mod watch;
