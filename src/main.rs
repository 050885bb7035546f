use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use statboard::{
    api, cache::AppCache, config::Settings, dashboard, state::AppState, upstream::AnalyticsClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    let client = AnalyticsClient::new(&settings)?;
    info!("Watching analytics document at {}", client.url());

    let cache = AppCache::new(&settings);
    if settings.cache_ttl_secs > 0 {
        info!("Snapshot cache enabled ({}s TTL)", settings.cache_ttl_secs);
    } else {
        info!("Snapshot cache disabled, fetching per page view");
    }

    let state = AppState::new(client, cache, settings.clone());

    // CORS layer
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    // Build router
    let app = Router::new()
        .route("/", get(dashboard::dashboard_index))
        .route("/api/summary", get(api::get_summary))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::new(
        settings.host.parse().unwrap_or([0, 0, 0, 0].into()),
        settings.port,
    );
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
