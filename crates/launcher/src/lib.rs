//! Process launcher for the parkcast demo.
//!
//! Starts the API server and the dashboard as child processes and tears
//! both down again on shutdown.

pub mod supervisor;
