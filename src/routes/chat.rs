use axum::{Json, body::Bytes, extract::State};
use tracing::{debug, warn};

use crate::{
    message::{ChatRequest, ChatResponse},
    services::{bridge::INVALID_MESSAGE_REPLY, chatbot::generate_reply},
    state::SharedState,
};

/// Direct request/reply path. Never fails at the transport level: a body
/// that does not decode is answered with the fixed error reply.
pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Json<ChatResponse> {
    let reply = match serde_json::from_slice::<ChatRequest>(&body) {
        Ok(req) => {
            debug!(len = req.message.len(), has_interests = !req.interests.is_empty(), "chat request");
            generate_reply(&req.message, &req.interests, state.picker.as_ref())
        }
        Err(e) => {
            warn!(error = %e, "invalid chat body");
            INVALID_MESSAGE_REPLY.to_string()
        }
    };

    Json(ChatResponse { reply })
}
