//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, target_url, key, secret_key, is_active, clicks, created_at";

/// PostgreSQL repository for URL mappings.
///
/// Click increments and deactivation are single `UPDATE ... RETURNING`
/// statements, so concurrent requests never lose an update.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(&format!(
            r#"
            INSERT INTO urls (target_url, key, secret_key)
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new_mapping.target_url)
        .bind(&new_mapping.key)
        .bind(&new_mapping.secret_key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn key_exists(&self, key: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM urls WHERE key = $1)",
        )
        .bind(key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM urls
            WHERE key = $1 AND is_active
            "#
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM urls
            WHERE secret_key = $1 AND is_active
            "#
        ))
        .bind(secret_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn increment_clicks(&self, mapping: &UrlMapping) -> Result<UrlMapping, AppError> {
        sqlx::query_as::<_, UrlMapping>(&format!(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE id = $1 AND is_active
            RETURNING {COLUMNS}
            "#
        ))
        .bind(mapping.id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("URL mapping is no longer active", json!({ "id": mapping.id })))
    }

    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(&format!(
            r#"
            UPDATE urls
            SET is_active = FALSE
            WHERE secret_key = $1 AND is_active
            RETURNING {COLUMNS}
            "#
        ))
        .bind(secret_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
