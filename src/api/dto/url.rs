//! DTOs for shortening and administration endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlInfo;

/// Request to shorten a URL.
///
/// The URL is validated by [`crate::application::services::UrlService::shorten`]
/// so every entry point rejects it with the same message.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub target_url: String,
}

/// Mapping details returned by `POST /url` and `GET /admin/{secret_key}`.
///
/// ```json
/// {
///   "target_url": "https://example.com/path",
///   "is_active": true,
///   "clicks": 0,
///   "url": "http://localhost:8000/AbC12",
///   "admin_url": "http://localhost:8000/admin/AbC12_x9Yz8WvU"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlInfoResponse {
    pub target_url: String,
    pub is_active: bool,
    pub clicks: i64,
    pub url: String,
    pub admin_url: String,
}

impl From<UrlInfo> for UrlInfoResponse {
    fn from(info: UrlInfo) -> Self {
        Self {
            target_url: info.target_url,
            is_active: info.is_active,
            clicks: info.clicks,
            url: info.public_url,
            admin_url: info.admin_url,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}
