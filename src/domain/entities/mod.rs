//! Core domain entities.
//!
//! - [`UrlMapping`] - A short key to target URL mapping as stored
//! - [`NewUrlMapping`] - Input for creating a mapping
//! - [`UrlInfo`] - A mapping together with its derived public and admin URLs

pub mod url_info;
pub mod url_mapping;

pub use url_info::UrlInfo;
pub use url_mapping::{NewUrlMapping, UrlMapping};
