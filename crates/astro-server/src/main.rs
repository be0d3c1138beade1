//! astro-wealth HTTP Server
//!
//! Axum-based JSON API over the astro-engine: natal reports, insight
//! bundles, compatibility, cosmic weather and transits. Anything that is
//! not an API route is served from the static directory.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use astro_engine::{InsightEngine, MarketFeed, StaticMarketFeed};

use crate::config::ServerConfig;
use crate::handlers::{
    compatibility_handler, cosmic_weather_handler, health_check, insight_handler, natal_handler,
    transits_handler,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let feed = match &config.market_snapshot {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            tracing::info!("✓ Market snapshot loaded from {}", path.display());
            StaticMarketFeed::try_from(raw.as_str())?
        }
        None => StaticMarketFeed::new(),
    };
    let market: Arc<dyn MarketFeed> = Arc::new(feed);
    match config.market_trend {
        Some(trend) => tracing::info!("✓ Market trend forced to {}", trend),
        None => tracing::info!("✓ Market context from {} feed", market.name()),
    }

    let state = AppState {
        market,
        insight: InsightEngine::new(),
        config: Arc::new(config.clone()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/natal", post(natal_handler))
        .route("/api/insight", post(insight_handler))
        .route("/api/compatibility", post(compatibility_handler))
        .route("/api/cosmic-weather", get(cosmic_weather_handler))
        .route("/api/transits", get(transits_handler))
        // Static frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 astro-wealth server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  POST /api/natal             - Natal report");
    tracing::info!("  POST /api/insight           - Natal report + insight bundle");
    tracing::info!("  POST /api/compatibility     - Sign compatibility");
    tracing::info!("  GET  /api/cosmic-weather    - Today's weather for ?sign=");
    tracing::info!("  GET  /api/transits          - Today's transits");
    tracing::info!("  Static files from {}", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
