//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// The click is counted before the redirect is returned.
///
/// # Errors
///
/// Returns 404 Not Found if no active mapping uses the key.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.url_service.resolve(&key).await?;

    Ok(Redirect::temporary(&target_url))
}
