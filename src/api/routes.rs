//! API route configuration.

use crate::api::handlers::{admin_info_handler, deactivate_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and administration routes.
///
/// # Endpoints
///
/// - `POST   /url`                 - Create a short URL
/// - `GET    /admin/{secret_key}`  - Show mapping details and clicks
/// - `DELETE /admin/{secret_key}`  - Deactivate a mapping
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler))
        .route(
            "/admin/{secret_key}",
            get(admin_info_handler).delete(deactivate_handler),
        )
}
