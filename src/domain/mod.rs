//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Business logic lives in [`crate::application::services`]; repository
//! implementations live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
