//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgUrlRepository`] - URL mapping storage, lookup, click counting and deactivation

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
