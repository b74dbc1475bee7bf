// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Inbound chat payload. `interests` may be absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, interests: impl Into<String>) -> Self {
        Self { message: message.into(), interests: interests.into() }
    }

    /// Decode a serialized payload. Anything that is not an object with a
    /// string `message` is rejected.
    pub fn from_payload(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct BridgeInput {
    pub session_id: Option<String>,
    pub payload: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BridgeAck {
    pub session_id: String,
    pub outcome: crate::services::bridge::BridgeOutcome,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BridgeReply {
    pub session_id: String,
    pub reply: Option<String>,
}
