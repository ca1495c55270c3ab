//! Handlers for the job-status endpoints: file upload and progress lookup.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use parkcast_core::error::CoreError;
use parkcast_core::session::{SessionId, SessionStatus, SessionStore};

use crate::background;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: SessionId,
}

/// Reply for a progress lookup.
///
/// Unknown sessions report `{"error": ...}` with a 200 status rather
/// than an HTTP error code; existing clients depend on that shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProgressReply {
    Status(SessionStatus),
    Error { error: &'static str },
}

/// POST /upload/
///
/// Accepts any bytes in the multipart `file` field, writes them to
/// `<upload_dir>/<session_id>_<filename>`, and schedules the detached
/// phase-advance task. Returns the new session id without waiting for
/// processing.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(sanitize_file_name)
            .unwrap_or_else(|| "upload.bin".to_string());
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "multipart field 'file' is required".to_string(),
        ))
    })?;

    let session_id = SessionStore::next_id();
    let path = state
        .config
        .upload_dir
        .join(format!("{session_id}_{file_name}"));
    tokio::fs::write(&path, &bytes).await?;

    // Register only after the bytes are on disk; a failed write must not
    // leave a session that never progresses.
    state.sessions.register(session_id).await;

    tracing::info!(
        %session_id,
        path = %path.display(),
        size = bytes.len(),
        "Stored uploaded file"
    );

    tokio::spawn(background::simulation::run(
        state.sessions.clone(),
        session_id,
    ));

    Ok(Json(UploadResponse { session_id }))
}

/// GET /progress/{session_id}
///
/// Returns the current status record verbatim. Ids that are unknown or
/// not well-formed UUIDs both get the error reply.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ProgressReply> {
    let record = match Uuid::parse_str(&session_id) {
        Ok(id) => state.sessions.get(&id).await,
        Err(_) => None,
    };

    match record {
        Some(status) => Json(ProgressReply::Status(status)),
        None => Json(ProgressReply::Error {
            error: "Session not found",
        }),
    }
}

/// Reduce a client-supplied filename to its final path component so the
/// stored file always lands inside the upload dir.
fn sanitize_file_name(name: &str) -> String {
    let trimmed = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim()
        .to_string();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        "upload.bin".to_string()
    } else {
        trimmed
    }
}
