//! Request-side types.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) as early as possible for tracing
//! - Describe the query parameters of the relay route

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID generator backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Name of the relay route's only query parameter.
pub const URL_PARAM: &str = "url";

/// Query string of `GET /request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayParams {
    /// Target passed through untouched; the outbound client validates it.
    pub url: String,
}

impl RelayParams {
    /// Pick the target out of decoded query pairs. When `url` repeats, the
    /// last occurrence wins; `None` means the parameter is absent.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == URL_PARAM)
            .map(|(_, url)| Self { url })
    }
}
