//! HTTP route handlers.
//!
//! Every route is read-only. The cross-origin layer wraps the whole router
//! when enabled, and request tracing is enabled via middleware that generates
//! a unique request ID for each incoming request.

pub mod health;
pub mod home;
pub mod issues;

use axum::{middleware, routing::get, Router};

use crate::error::AppError;
use crate::http::cors::cors_layer;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Response for any path without a route.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with all routes, CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = state.config.cors.clone();

    let router = Router::new()
        .route("/", get(home::index))
        .route("/issues", get(issues::list))
        // Health check - plain text for orchestrator probes
        .route("/health", get(health::health))
        .fallback(not_found)
        .with_state(state);

    let router = if cors.enabled {
        router.layer(cors_layer(&cors))
    } else {
        router
    };

    // Request ID middleware - creates root span with request_id for correlation
    router.layer(middleware::from_fn(request_id_layer))
}
