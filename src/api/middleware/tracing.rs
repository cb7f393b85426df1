//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds request spans.
///
/// Secret keys travel in the path of admin requests, so the span records the
/// path with the secret replaced by `***` instead of the full URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactingMakeSpan;

impl<B> MakeSpan<B> for RedactingMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %redact_path(request.uri().path()),
            version = ?request.version(),
        )
    }
}

/// Replaces the secret key segment of `/admin/{secret_key}` paths.
pub fn redact_path(path: &str) -> String {
    match path.strip_prefix("/admin/") {
        Some(rest) if !rest.is_empty() => "/admin/***".to_string(),
        _ => path.to_string(),
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method, redacted path and HTTP
/// version. Responses are logged at `INFO` with status and latency in
/// milliseconds; 5xx responses are additionally logged at `ERROR`.
///
/// ```text
/// INFO request{method=GET path=/AbC12 version=HTTP/1.1}: finished processing request latency=3 ms status=307
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RedactingMakeSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RedactingMakeSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_admin_path() {
        assert_eq!(redact_path("/admin/abcde_12345678"), "/admin/***");
    }

    #[test]
    fn test_keeps_other_paths() {
        assert_eq!(redact_path("/abcde"), "/abcde");
        assert_eq!(redact_path("/url"), "/url");
        assert_eq!(redact_path("/admin/"), "/admin/");
    }
}
