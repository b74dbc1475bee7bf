use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use tracing::{info, warn};

use crate::{
    error::{AppError, Result},
    message::{BridgeAck, BridgeInput, BridgeReply},
    state::SharedState,
};

/// The envelope is decoded by hand so a malformed request still gets the
/// JSON error body, whatever its content type.
pub async fn submit_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<BridgeAck>> {
    let input: BridgeInput = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "invalid bridge envelope");
        AppError::BadRequest(format!("invalid bridge envelope: {e}"))
    })?;

    let session_id = match &input.session_id {
        Some(s) if !s.trim().is_empty() => state.sessions.ensure_session(s).await,
        _ => state.sessions.create_session().await,
    };

    let outcome = state
        .sessions
        .submit(&session_id, &input.payload, state.picker.as_ref())
        .await;
    info!(%session_id, ?outcome, "bridge payload");

    Ok(Json(BridgeAck { session_id, outcome }))
}

pub async fn reply_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<BridgeReply>> {
    let reply = state
        .sessions
        .get_reply(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("session {session_id}")))?;

    Ok(Json(BridgeReply { session_id, reply }))
}
