//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::url::{ShortenRequest, UrlInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "target_url": "https://example.com/path" }
/// ```
///
/// # Response
///
/// The new mapping with its public `url` and secret `admin_url`. The admin URL
/// is only ever returned here and from the admin endpoint itself.
///
/// # Errors
///
/// Returns 400 Bad Request if the target URL is not a valid absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let info = state.url_service.shorten(payload.target_url).await?;

    Ok(Json(info.into()))
}
