//! Short key generation.
//!
//! Keys are drawn from `[A-Za-z0-9]`, which is safe in a URL path without
//! escaping. Secret keys embed the public key followed by an independent random
//! suffix, so they can be correlated with their key but not guessed from it.

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};

/// Default length of a public key.
pub const DEFAULT_KEY_LENGTH: usize = 5;

/// Length of the random suffix of a secret key.
pub const SECRET_SUFFIX_LENGTH: usize = 8;

/// Separator between the public key and the secret suffix.
pub const SECRET_SEPARATOR: char = '_';

/// Keys that would be shadowed by fixed routes.
const RESERVED_KEYS: &[&str] = &["health"];

/// Generates a random alphanumeric string of `length` characters.
///
/// Makes no uniqueness guarantee.
///
/// # Examples
///
/// ```ignore
/// let key = generate_key(5);
/// assert_eq!(key.len(), 5);
/// assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_key(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates a key not yet used by any mapping in `repository`.
///
/// The repository is consulted on every attempt since other requests may be
/// creating mappings concurrently. There is no attempt limit: as the key space
/// fills up this takes longer but never gives up.
///
/// # Errors
///
/// Only repository errors are returned; generation itself cannot fail.
pub async fn generate_unique_key(
    repository: &dyn UrlRepository,
    length: usize,
) -> Result<String, AppError> {
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        let key = generate_key(length);

        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }

        if !repository.key_exists(&key).await? {
            if attempts > 1 {
                tracing::debug!(attempts, "Generated unique key after collisions");
            }
            return Ok(key);
        }
    }
}

/// Derives the secret admin key for `key`.
///
/// The result is `key`, an underscore, then eight random characters.
pub fn derive_secret_key(key: &str) -> String {
    format!(
        "{}{}{}",
        key,
        SECRET_SEPARATOR,
        generate_key(SECRET_SUFFIX_LENGTH)
    )
}
