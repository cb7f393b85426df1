#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};
use shortkey::application::services::{ServiceSettings, UrlService};
use shortkey::domain::entities::{NewUrlMapping, UrlMapping};
use shortkey::domain::repositories::UrlRepository;
use shortkey::error::AppError;
use shortkey::state::AppState;

pub const BASE_URL: &str = "http://s.example.com";

/// Repository keeping mappings in memory, with the same active-only lookup
/// rules as the PostgreSQL one.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    mappings: Mutex<Vec<UrlMapping>>,
    unavailable: bool,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like a lost database connection.
    pub fn unavailable() -> Self {
        Self {
            mappings: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    pub fn insert(&self, key: &str, secret_key: &str, target_url: &str, is_active: bool) {
        let mut mappings = self.mappings.lock().unwrap();
        let id = mappings.len() as i64 + 1;
        mappings.push(UrlMapping::new(
            id,
            target_url.to_string(),
            key.to_string(),
            secret_key.to_string(),
            is_active,
            0,
            Utc::now(),
        ));
    }

    pub fn all(&self) -> Vec<UrlMapping> {
        self.mappings.lock().unwrap().clone()
    }

    pub fn by_key(&self, key: &str) -> Option<UrlMapping> {
        self.all().into_iter().find(|m| m.key == key)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::store_unavailable("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        self.check()?;
        let mut mappings = self.mappings.lock().unwrap();

        if mappings
            .iter()
            .any(|m| m.key == new_mapping.key || m.secret_key == new_mapping.secret_key)
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let mapping = UrlMapping::new(
            mappings.len() as i64 + 1,
            new_mapping.target_url,
            new_mapping.key,
            new_mapping.secret_key,
            true,
            0,
            Utc::now(),
        );
        mappings.push(mapping.clone());
        Ok(mapping)
    }

    async fn key_exists(&self, key: &str) -> Result<bool, AppError> {
        self.check()?;
        Ok(self.mappings.lock().unwrap().iter().any(|m| m.key == key))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, AppError> {
        self.check()?;
        Ok(self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.key == key && m.is_active)
            .cloned())
    }

    async fn find_by_secret_key(&self, secret_key: &str) -> Result<Option<UrlMapping>, AppError> {
        self.check()?;
        Ok(self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.secret_key == secret_key && m.is_active)
            .cloned())
    }

    async fn increment_clicks(&self, mapping: &UrlMapping) -> Result<UrlMapping, AppError> {
        self.check()?;
        let mut mappings = self.mappings.lock().unwrap();
        let stored = mappings
            .iter_mut()
            .find(|m| m.id == mapping.id && m.is_active)
            .ok_or_else(|| AppError::not_found("URL mapping is no longer active", json!({})))?;
        stored.clicks += 1;
        Ok(stored.clone())
    }

    async fn deactivate_by_secret_key(
        &self,
        secret_key: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        self.check()?;
        let mut mappings = self.mappings.lock().unwrap();
        Ok(mappings
            .iter_mut()
            .find(|m| m.secret_key == secret_key && m.is_active)
            .map(|m| {
                m.is_active = false;
                m.clone()
            }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state_with(repository: Arc<InMemoryUrlRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(
        repository,
        ServiceSettings::new(BASE_URL, 5),
    ));
    AppState::new(url_service)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    (create_test_state_with(repository.clone()), repository)
}
