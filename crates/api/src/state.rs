use std::sync::Arc;

use parkcast_core::session::SessionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Process-wide session status map. Empty at process start, never
    /// persisted.
    pub sessions: SessionStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
