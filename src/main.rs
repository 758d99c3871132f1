//! videohub - token-gated video catalogue API
//!
//! Usage:
//!   videohub --bind 0.0.0.0:8000 --token-bytes 32

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use videohub_backend::{
    app::{router_with_cors, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Invalid configuration")?;
    init_tracing();

    info!("🚀 videohub starting");
    info!(
        "🔐 Session tokens: {} random bytes ({} hex chars)",
        config.token_bytes,
        config.token_bytes * 2
    );

    let state = AppState::new(config.token_generator());
    let app = router_with_cors(state, config.cors_permissive);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("🎯 API server listening on {}", config.bind);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "videohub_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
