//! Per-upload processing simulation.
//!
//! Walks a session through the fixed phase sequence, holding each phase
//! for [`STEP_DELAY`] before advancing. One task instance per upload;
//! the task is the only writer for its session key.

use std::time::Duration;

use parkcast_core::phase::Phase;
use parkcast_core::session::{SessionId, SessionStore};

/// Fixed hold time before each phase transition.
pub const STEP_DELAY: Duration = Duration::from_secs(4);

/// Advance `id` through the remaining phases until `done`.
///
/// Completion is communicated only through the shared store; there is no
/// result channel back to the submitter.
pub async fn run(store: SessionStore, id: SessionId) {
    for phase in &Phase::SEQUENCE[1..] {
        tokio::time::sleep(STEP_DELAY).await;
        match store.advance(&id, *phase).await {
            Ok(()) => {
                tracing::debug!(session_id = %id, phase = phase.as_str(), "Session advanced");
            }
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "Failed to advance session");
                return;
            }
        }
    }
    tracing::info!(session_id = %id, "Processing simulation finished");
}
