//! Helpers used across the application.
//!
//! - [`key_generator`] - Public and secret key generation
//! - [`url_validator`] - Target URL validation

pub mod key_generator;
pub mod url_validator;
