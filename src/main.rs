//! ynr - Candidate and Election Data API
//!
//! Serves read-only JSON projections of people, organizations, posts,
//! elections and areas from a dataset loaded at startup.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ynr::config::{self, LogFormat};
use ynr::{api, AppState, Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let logging = config::LoggingConfig::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ynr=debug,tower_http=debug".into());
    match logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    // Load configuration
    let config = config::init();
    tracing::info!(
        "Starting ynr server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Initialize application state
    let state = AppState::new()?;
    tracing::info!(
        "Application state initialized (API versions: {})",
        state.api.allowed_versions.join(", ")
    );

    // Build router
    let app = Router::new()
        .merge(api::routes())
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| Error::Config(format!("invalid listen address: {}", e)))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
