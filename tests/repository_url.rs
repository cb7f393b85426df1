//! PostgreSQL repository tests. `#[sqlx::test]` creates a fresh database per
//! test from `DATABASE_URL` and applies the migrations.

use shortkey::domain::entities::NewUrlMapping;
use shortkey::domain::repositories::UrlRepository;
use shortkey::error::AppError;
use shortkey::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_mapping(key: &str) -> NewUrlMapping {
    NewUrlMapping {
        target_url: "https://example.com".to_string(),
        key: key.to_string(),
        secret_key: format!("{key}_12345678"),
    }
}

#[sqlx::test]
async fn test_create_mapping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let mapping = repo.create(new_mapping("abcde")).await.unwrap();

    assert!(mapping.id > 0);
    assert_eq!(mapping.key, "abcde");
    assert_eq!(mapping.secret_key, "abcde_12345678");
    assert_eq!(mapping.target_url, "https://example.com");
    assert!(mapping.is_active);
    assert_eq!(mapping.clicks, 0);
}

#[sqlx::test]
async fn test_create_duplicate_key_conflicts(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_mapping("dupe1")).await.unwrap();
    let result = repo
        .create(NewUrlMapping {
            secret_key: "dupe1_other123".to_string(),
            ..new_mapping("dupe1")
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_lookups_only_see_active(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.create(new_mapping("live1")).await.unwrap();

    assert!(repo.find_by_key("live1").await.unwrap().is_some());
    assert!(repo.find_by_secret_key("live1_12345678").await.unwrap().is_some());

    repo.deactivate_by_secret_key("live1_12345678").await.unwrap();

    assert!(repo.find_by_key("live1").await.unwrap().is_none());
    assert!(repo.find_by_secret_key("live1_12345678").await.unwrap().is_none());
    assert!(repo.key_exists("live1").await.unwrap());
}

#[sqlx::test]
async fn test_key_exists(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(!repo.key_exists("nope1").await.unwrap());
    repo.create(new_mapping("nope1")).await.unwrap();
    assert!(repo.key_exists("nope1").await.unwrap());
}

#[sqlx::test]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let mapping = repo.create(new_mapping("click")).await.unwrap();

    for expected in 1..=3 {
        let updated = repo.increment_clicks(&mapping).await.unwrap();
        assert_eq!(updated.clicks, expected);
    }
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let mapping = repo.create(new_mapping("race1")).await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            let mapping = mapping.clone();
            tokio::spawn(async move { repo.increment_clicks(&mapping).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = repo.find_by_key("race1").await.unwrap().unwrap();
    assert_eq!(stored.clicks, 20);
}

#[sqlx::test]
async fn test_deactivate_twice(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.create(new_mapping("twice")).await.unwrap();

    let first = repo.deactivate_by_secret_key("twice_12345678").await.unwrap();
    assert!(!first.unwrap().is_active);

    let second = repo.deactivate_by_secret_key("twice_12345678").await.unwrap();
    assert!(second.is_none());
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_increment_clicks_skips_inactive(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    let mapping = repo.create(new_mapping("stale")).await.unwrap();

    repo.deactivate_by_secret_key("stale_12345678").await.unwrap();
    let result = repo.increment_clicks(&mapping).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    let clicks: i64 = sqlx::query_scalar("SELECT clicks FROM urls WHERE key = 'stale'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(clicks, 0);
}
