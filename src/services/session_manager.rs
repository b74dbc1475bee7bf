// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::bridge::{BridgeOutcome, SessionBridge};
use crate::services::chatbot::ReplyPicker;

#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub bridge: SessionBridge,
    pub last_active: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), bridge: SessionBridge::new(), last_active: Instant::now() }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Create a fresh session and return its id.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        id
    }

    // Ensure there's a session with this id.
    pub async fn ensure_session(&self, id: &str) -> String {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return id.to_string();
            }
        }
        let mut guard = self.inner.write().await;
        guard.entry(id.to_string()).or_insert_with(|| Session::new(id));
        id.to_string()
    }

    /// Feed a payload into the session's bridge and touch last_active.
    /// The payload and its reply are updated under one write lock.
    pub async fn submit(&self, session_id: &str, payload: &str, picker: &dyn ReplyPicker) -> BridgeOutcome {
        let mut guard = self.inner.write().await;
        let entry = guard
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id));
        entry.last_active = Instant::now();
        entry.bridge.submit(payload, picker)
    }

    /// `None` if the session is unknown, `Some(None)` if nothing was replied yet.
    pub async fn get_reply(&self, session_id: &str) -> Option<Option<String>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.bridge.reply().map(str::to_owned))
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        before - guard.len()
    }

    /// Number of sessions
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// List session ids
    pub async fn list_session_ids(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        guard.keys().cloned().collect()
    }
}
