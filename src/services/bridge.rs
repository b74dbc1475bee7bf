// src/services/bridge.rs
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::message::ChatRequest;
use crate::services::chatbot::{ReplyPicker, generate_reply};

pub const INVALID_MESSAGE_REPLY: &str = "Error: invalid message.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeOutcome {
    /// Empty payload, nothing was signalled.
    Ignored,
    /// Same payload as last time, reply kept as is.
    Unchanged,
    Replied,
    /// Payload did not decode, reply set to the fixed error text.
    Rejected,
}

/// Last payload seen and the reply produced for it.
#[derive(Debug, Clone, Default)]
pub struct SessionBridge {
    last_payload: Option<String>,
    last_reply: Option<String>,
}

impl SessionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, payload: &str, picker: &dyn ReplyPicker) -> BridgeOutcome {
        if payload.is_empty() {
            return BridgeOutcome::Ignored;
        }
        if self.last_payload.as_deref() == Some(payload) {
            debug!("payload unchanged, skipping");
            return BridgeOutcome::Unchanged;
        }

        let (reply, outcome) = match ChatRequest::from_payload(payload) {
            Ok(req) => (
                generate_reply(&req.message, &req.interests, picker),
                BridgeOutcome::Replied,
            ),
            Err(e) => {
                warn!(error = %e, "rejecting bridge payload");
                (INVALID_MESSAGE_REPLY.to_string(), BridgeOutcome::Rejected)
            }
        };

        // Both halves are written together.
        self.last_payload = Some(payload.to_string());
        self.last_reply = Some(reply);
        outcome
    }

    pub fn reply(&self) -> Option<&str> {
        self.last_reply.as_deref()
    }

    pub fn last_payload(&self) -> Option<&str> {
        self.last_payload.as_deref()
    }
}
