// src/routes/mod.rs
pub mod bridge;
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use bridge::{reply_handler, submit_handler};
use chat::chat_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(public_dir: impl AsRef<Path>) -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/bridge", post(submit_handler))
        .route("/bridge/{session_id}", get(reply_handler));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
