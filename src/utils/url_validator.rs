//! Target URL validation.
//!
//! A target URL must be absolute, use a web or FTP scheme, and name a host
//! that is either an IP address or a dotted domain name. The URL is stored
//! exactly as submitted, so validation never rewrites it.

use url::{Host, Url};

/// Message returned to clients whose target URL is rejected.
pub const INVALID_URL_MSG: &str = "Your provided URL is not valid";

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not contain whitespace")]
    Whitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Invalid host: {0}")]
    InvalidHost(String),
}

/// Checks that `input` is a well-formed absolute URL.
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] encountered.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/path").is_ok());
/// assert!(validate_target_url("example.com").is_err());       // no scheme
/// assert!(validate_target_url("https://").is_err());          // no host
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::Whitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    match url.host() {
        None => return Err(UrlValidationError::MissingHost),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        Some(Host::Domain(domain)) => {
            if !is_valid_domain(domain) {
                return Err(UrlValidationError::InvalidHost(domain.to_string()));
            }
        }
    }

    Ok(url)
}

/// A domain needs at least two non-empty labels, each made of letters, digits
/// and inner hyphens, and an alphabetic top-level label.
fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels.last().is_some_and(|tld| {
        tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
    });

    labels_ok && tld_ok
}
