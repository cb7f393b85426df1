//! Admin view of a mapping.

use super::UrlMapping;

/// A mapping plus the URLs derived from the configured base URL.
///
/// Returned by shorten and admin-info operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInfo {
    pub target_url: String,
    pub public_url: String,
    pub admin_url: String,
    pub clicks: i64,
    pub is_active: bool,
}

impl UrlInfo {
    pub fn from_mapping(mapping: &UrlMapping, public_url: String, admin_url: String) -> Self {
        Self {
            target_url: mapping.target_url.clone(),
            public_url,
            admin_url,
            clicks: mapping.clicks,
            is_active: mapping.is_active,
        }
    }
}
