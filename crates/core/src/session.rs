//! In-memory session status store.
//!
//! Every upload gets an opaque session id and a status record that the
//! background simulation task mutates as it walks the phase sequence.
//! State is process-lifetime only: the store starts empty and records are
//! never removed. Losing a session on restart is accepted demo behaviour.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CoreError;
use crate::phase::Phase;

/// Opaque session identifier handed back to upload callers.
pub type SessionId = Uuid;

/// Current status of one processing session, serialized verbatim as the
/// progress payload.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub status: Phase,
    pub message: String,
}

impl SessionStatus {
    /// Build the record for a given phase with its fixed message.
    pub fn for_phase(phase: Phase) -> Self {
        Self {
            status: phase,
            message: phase.message().to_string(),
        }
    }
}

/// Shared accessor over the process-wide session map.
///
/// Cheaply cloneable; each background task only ever writes its own key,
/// so the `RwLock` sees no write contention in practice.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, SessionStatus>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh session id.
    pub fn next_id() -> SessionId {
        Uuid::new_v4()
    }

    /// Register `id` in the `Starting` phase.
    pub async fn register(&self, id: SessionId) {
        self.inner
            .write()
            .await
            .insert(id, SessionStatus::for_phase(Phase::Starting));
    }

    /// Register a new session and return its id.
    pub async fn create(&self) -> SessionId {
        let id = Self::next_id();
        self.register(id).await;
        id
    }

    /// Current record for `id`, if the session exists.
    pub async fn get(&self, id: &SessionId) -> Option<SessionStatus> {
        self.inner.read().await.get(id).cloned()
    }

    /// Move `id` to `phase`, updating both status and message.
    pub async fn advance(&self, id: &SessionId, phase: Phase) -> Result<(), CoreError> {
        match self.inner.write().await.get_mut(id) {
            Some(record) => {
                *record = SessionStatus::for_phase(phase);
                Ok(())
            }
            None => Err(CoreError::SessionNotFound(*id)),
        }
    }

    /// Number of sessions tracked since process start.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
