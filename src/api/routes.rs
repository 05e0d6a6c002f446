//! Router assembly

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::middleware::catch_panic;
use crate::AppState;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/raw", get(handlers::raw))
        .route("/health", get(handlers::health))
        .route("/info", get(handlers::info))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(catch_panic::layer())
        // Outermost, so panics show up in the trace as 500s
        .layer(TraceLayer::new_for_http())
}
