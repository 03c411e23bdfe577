//! Response bodies and error mapping.
//!
//! # Design Decisions
//! - A missing `url` or an undecodable query gets a structured 422 body
//! - Relay failures collapse into an opaque 500; the cause is only logged
//! - Upstream status codes never leak onto this service's status

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::http::request::URL_PARAM;
use crate::relay::RelayError;

/// Fixed payload of `GET /`.
pub const INFO_MESSAGE: &str = "Simple URL Request API";

#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self { message: INFO_MESSAGE }
    }
}

/// Errors a handler can hand back to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The relay route was called without a `url` parameter.
    MissingUrl,
    /// The query string did not decode.
    Validation(QueryRejection),
    /// The outbound exchange failed.
    Relay(RelayError),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection)
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        ApiError::Relay(err)
    }
}

fn validation_error(msg: String, kind: &'static str) -> Response {
    let body = json!({
        "detail": [{
            "loc": ["query", URL_PARAM],
            "msg": msg,
            "type": kind,
        }]
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingUrl => validation_error(
                format!("missing query parameter `{URL_PARAM}`"),
                "missing",
            ),
            ApiError::Validation(rejection) => validation_error(rejection.body_text(), "invalid"),
            ApiError::Relay(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
