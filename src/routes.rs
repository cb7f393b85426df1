//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`                 - Create a short URL
//! - `GET    /admin/{secret_key}`  - Mapping details
//! - `DELETE /admin/{secret_key}`  - Deactivate a mapping
//! - `GET    /health`              - Health check
//! - `GET    /{key}`               - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging with secret keys redacted
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
