//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Lookups used for redirects and administration only see active mappings.
/// [`UrlRepository::key_exists`] is the one query that spans the whole key
/// space, so that a key is never reused once issued.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping, active with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the key or secret key is already taken.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Returns `true` if any mapping, active or deactivated, uses `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn key_exists(&self, key: &str) -> Result<bool, AppError>;

    /// Finds an active mapping by its public key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if an active mapping matches
    /// - `Ok(None)` if none matches or the match is deactivated
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds an active mapping by its secret key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Atomically increments the click counter of `mapping` by one.
    ///
    /// Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record is no longer active.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn increment_clicks(&self, mapping: &UrlMapping) -> Result<UrlMapping, AppError>;

    /// Deactivates the active mapping owning `secret_key`.
    ///
    /// Returns the now inactive record, or `Ok(None)` if no active mapping
    /// matched. A second call with the same secret key therefore yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<UrlMapping>, AppError>;

    /// Round-trips to the store. Used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}
