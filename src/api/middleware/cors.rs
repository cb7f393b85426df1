//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer accepting any origin, method and header.
///
/// The request origin is mirrored back and credentials are allowed, which lets
/// browser front-ends on other origins call the API directly.
pub fn layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
