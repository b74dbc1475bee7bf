// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::services::chatbot::{RandomPicker, ReplyPicker};
use crate::services::session_manager::SessionManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub picker: Arc<dyn ReplyPicker>,
}

impl AppState {
    pub fn new(session_ttl: Duration) -> Self {
        Self::with_picker(session_ttl, Arc::new(RandomPicker))
    }

    pub fn with_picker(session_ttl: Duration, picker: Arc<dyn ReplyPicker>) -> Self {
        Self {
            sessions: SessionManager::new(session_ttl),
            picker,
        }
    }
}
