//! Handlers for the secret-key administration endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url::{DetailResponse, UrlInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shows a mapping's details, including its click count.
///
/// # Endpoint
///
/// `GET /admin/{secret_key}`
///
/// # Errors
///
/// Returns 404 Not Found if no active mapping owns the secret key.
pub async fn admin_info_handler(
    Path(secret_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let info = state.url_service.get_admin_info(&secret_key).await?;

    Ok(Json(info.into()))
}

/// Deactivates a mapping so its key stops redirecting.
///
/// # Endpoint
///
/// `DELETE /admin/{secret_key}`
///
/// # Response
///
/// ```json
/// { "detail": "Successfully deleted shortened URL for 'https://example.com/path'" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no active mapping owns the secret key, including
/// when it was already deactivated.
pub async fn deactivate_handler(
    Path(secret_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DetailResponse>, AppError> {
    let detail = state.url_service.deactivate(&secret_key).await?;

    Ok(Json(DetailResponse { detail }))
}
