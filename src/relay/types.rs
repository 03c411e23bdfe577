//! Relay result and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Outcome of one successful upstream exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayResult {
    /// Literal upstream HTTP status code.
    pub status: u16,
    /// Full upstream body decoded as text.
    pub content: String,
}

/// Errors that can occur while relaying a request.
///
/// Every variant surfaces to the caller as the same opaque server error;
/// the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The target could not be parsed as an absolute URL.
    #[error("invalid target URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Client construction, DNS, connect or protocol failure.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered but the body could not be read.
    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

impl RelayError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::InvalidUrl { .. } => "invalid_url",
            RelayError::Transport(_) => "transport",
            RelayError::Body(_) => "body",
        }
    }
}

/// Result type for relay operations.
pub type RelayOutcome<T> = Result<T, RelayError>;
