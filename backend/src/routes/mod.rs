//! Route definitions for the AMMS inventory backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Inventory tables
        .nest("/inventory", inventory_routes())
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(handlers::list_articles))
        .route("/articles/grouped", get(handlers::list_grouped_articles))
        .route("/articles/low-stock", get(handlers::list_low_stock))
        .route("/quantities", post(handlers::update_quantities))
}
