//! AMMS Inventory Backend Server
//!
//! Serves the warehouse/inventory tables of the aviation maintenance
//! management system: flattened and grouped article lists, low-stock
//! reports, and the bulk quantity update relay to the upstream ERP.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use crate::config::Config;

use external::ErpStockClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub stock: ErpStockClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amms_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AMMS Inventory Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Upstream ERP: {}", config.upstream.base_url);

    let stock = ErpStockClient::new(
        config.upstream.base_url.clone(),
        config.upstream.api_key.clone(),
        config.upstream.timeout_seconds,
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        stock,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AMMS Inventory API"
}
