//! Shortening, redirect resolution and administration of URL mappings.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlInfo, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, derive_secret_key, generate_unique_key};
use crate::utils::url_validator::{INVALID_URL_MSG, validate_target_url};
use serde_json::json;
use tracing::{debug, info};

/// Settings the service needs from the process configuration.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Public origin of the service, without trailing slash.
    pub base_url: String,
    /// Length of generated public keys.
    pub key_length: usize,
}

impl ServiceSettings {
    pub fn new(base_url: impl Into<String>, key_length: usize) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key_length,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::new("http://localhost:8000", DEFAULT_KEY_LENGTH)
    }
}

/// Service orchestrating key generation and the mapping store.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    settings: ServiceSettings,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, settings: ServiceSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Shortens `target_url`.
    ///
    /// Validates the URL, picks a key no mapping has ever used, derives the
    /// secret key and persists the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not a valid absolute URL;
    /// the store is not touched in that case.
    /// Returns [`AppError::Conflict`] if a concurrent request claimed the same key.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn shorten(&self, target_url: String) -> Result<UrlInfo, AppError> {
        if let Err(e) = validate_target_url(&target_url) {
            return Err(AppError::bad_request(
                INVALID_URL_MSG,
                json!({ "reason": e.to_string() }),
            ));
        }

        let key = generate_unique_key(self.repository.as_ref(), self.settings.key_length).await?;
        let secret_key = derive_secret_key(&key);

        let mapping = self
            .repository
            .create(NewUrlMapping {
                target_url,
                key,
                secret_key,
            })
            .await?;

        info!(id = mapping.id, key = %mapping.key, "Created short URL");

        Ok(self.info_for(&mapping))
    }

    /// Resolves an active key to its target URL and counts the click.
    ///
    /// The click is recorded before the caller issues the redirect, so it counts
    /// even if the client never receives the response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active mapping uses `key`.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, key: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| self.not_found(self.public_url(key), json!({ "key": key })))?;

        // A deactivation between lookup and increment reads as a missing key.
        let updated = match self.repository.increment_clicks(&mapping).await {
            Err(AppError::NotFound { .. }) => {
                return Err(self.not_found(self.public_url(key), json!({ "key": key })));
            }
            other => other?,
        };
        debug!(key, clicks = updated.clicks, "Resolved short URL");

        Ok(updated.target_url)
    }

    /// Returns the admin view of the active mapping owning `secret_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active mapping matches.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn get_admin_info(&self, secret_key: &str) -> Result<UrlInfo, AppError> {
        let mapping = self
            .repository
            .find_by_secret_key(secret_key)
            .await?
            .ok_or_else(|| {
                self.not_found(
                    self.admin_url(secret_key),
                    json!({ "secret_key": secret_key }),
                )
            })?;

        Ok(self.info_for(&mapping))
    }

    /// Deactivates the mapping owning `secret_key`.
    ///
    /// Returns a confirmation naming the target URL. Deactivating twice fails
    /// the second time with [`AppError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active mapping matches.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn deactivate(&self, secret_key: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .deactivate_by_secret_key(secret_key)
            .await?
            .ok_or_else(|| {
                self.not_found(
                    self.admin_url(secret_key),
                    json!({ "secret_key": secret_key }),
                )
            })?;

        info!(id = mapping.id, key = %mapping.key, "Deactivated short URL");

        Ok(format!(
            "Successfully deleted shortened URL for '{}'",
            mapping.target_url
        ))
    }

    /// Checks that the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Public redirect URL for `key`.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.settings.base_url, key)
    }

    /// Admin URL for `secret_key`.
    pub fn admin_url(&self, secret_key: &str) -> String {
        format!("{}/admin/{}", self.settings.base_url, secret_key)
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn info_for(&self, mapping: &UrlMapping) -> UrlInfo {
        UrlInfo::from_mapping(
            mapping,
            self.public_url(&mapping.key),
            self.admin_url(&mapping.secret_key),
        )
    }

    fn not_found(&self, requested: String, details: serde_json::Value) -> AppError {
        AppError::not_found(format!("URL '{}' doesn't exist", requested), details)
    }
}
