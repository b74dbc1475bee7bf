use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use career_navigator::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(config.session_ttl));

    let sessions = state.sessions.clone();
    let purge_every = config.purge_interval;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(purge_every);
        loop {
            ticker.tick().await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                info!(removed, "purged idle sessions");
            }
        }
    });

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.public_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(address = %config.bind_address, public_dir = %config.public_dir.display(), "career navigator listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
