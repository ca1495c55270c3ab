//! Background tasks.
//!
//! Each submodule provides an async function intended to be spawned via
//! `tokio::spawn`. The simulation task is fire-and-forget: once
//! scheduled it always runs to completion, there is no cancellation.

pub mod simulation;
