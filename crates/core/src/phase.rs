//! Processing phases for uploaded files.
//!
//! A session moves through a fixed, ordered sequence of phases. The
//! sequence never branches, never retries, and never regresses; `Done`
//! is terminal.

use serde::{Deserialize, Serialize};

/// A single step in the simulated processing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Starting,
    Preprocessed,
    MainProcess,
    Postprocess,
    Done,
}

impl Phase {
    /// The complete phase sequence, in transition order.
    pub const SEQUENCE: [Phase; 5] = [
        Phase::Starting,
        Phase::Preprocessed,
        Phase::MainProcess,
        Phase::Postprocess,
        Phase::Done,
    ];

    /// Wire name of the phase (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Starting => "starting",
            Phase::Preprocessed => "preprocessed",
            Phase::MainProcess => "main_process",
            Phase::Postprocess => "postprocess",
            Phase::Done => "done",
        }
    }

    /// Human-readable status message reported for this phase.
    pub fn message(&self) -> &'static str {
        match self {
            Phase::Starting => "Load ...",
            Phase::Preprocessed => "Preprocessing complete",
            Phase::MainProcess => "Main processing complete",
            Phase::Postprocess => "Postprocessing complete",
            Phase::Done => "All steps completed",
        }
    }

    /// Whether this phase ends the sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done)
    }
}
