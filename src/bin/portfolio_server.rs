// Portfolio server binary entry point
//
// Usage: cargo run --bin portfolio_server
// Configuration: CONTENT_PATH, PORT, DEFAULT_LANG, CACHE_TTL_SECS (see config.rs)

use portfolio_renderer::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_renderer=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio server...");

    let config = ServerConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_PATH: {:?}", config.content_path);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  DEFAULT_LANG: {}", config.default_lang);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl_secs);

    let port = config.port;
    let state = AppState::new(config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
