//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A stored mapping from a short public key to a target URL.
///
/// `key`, `secret_key` and `target_url` never change after creation. `is_active`
/// only ever goes from `true` to `false`, and `clicks` only grows.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub target_url: String,
    pub key: String,
    pub secret_key: String,
    pub is_active: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        target_url: String,
        key: String,
        secret_key: String,
        is_active: bool,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            target_url,
            key,
            secret_key,
            is_active,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The store assigns `id` and `created_at` and starts the mapping active with zero clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub target_url: String,
    pub key: String,
    pub secret_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            1,
            "https://example.com".to_string(),
            "abcde".to_string(),
            "abcde_12345678".to_string(),
            true,
            0,
            now,
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.target_url, "https://example.com");
        assert_eq!(mapping.key, "abcde");
        assert_eq!(mapping.secret_key, "abcde_12345678");
        assert!(mapping.is_active);
        assert_eq!(mapping.clicks, 0);
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_url_mapping_creation() {
        let new_mapping = NewUrlMapping {
            target_url: "https://rust-lang.org".to_string(),
            key: "xyz78".to_string(),
            secret_key: "xyz78_AbCdEfGh".to_string(),
        };

        assert_eq!(new_mapping.key, "xyz78");
        assert!(new_mapping.secret_key.starts_with("xyz78_"));
    }
}
