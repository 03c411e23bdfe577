//! Transient outbound client.
//!
//! # Responsibilities
//! - Parse the caller-supplied target as an absolute URL
//! - Open a client scoped to a single relay
//! - Issue exactly one GET and wait for headers and the full body
//! - Release the client on every exit path (it is dropped with the future)

use std::time::Instant;

use url::Url;

use crate::observability::metrics;
use crate::relay::types::{RelayError, RelayOutcome, RelayResult};

/// Perform one outbound GET against `target` and capture status and body.
pub async fn relay_get(target: &str) -> RelayOutcome<RelayResult> {
    let start = Instant::now();
    let outcome = fetch(target).await;

    match &outcome {
        Ok(result) => {
            tracing::debug!(
                url = %target,
                upstream_status = result.status,
                bytes = result.content.len(),
                "Relay completed"
            );
            metrics::record_relay("success", start);
        }
        Err(e) => metrics::record_relay(e.kind(), start),
    }

    outcome
}

async fn fetch(target: &str) -> RelayOutcome<RelayResult> {
    let url = Url::parse(target).map_err(|source| RelayError::InvalidUrl {
        url: target.to_string(),
        source,
    })?;

    // Built per call; never shared between relays. Connects directly, proxy
    // environment variables are not consulted.
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .map_err(RelayError::Transport)?;

    tracing::debug!(url = %url, "Relaying GET");

    let response = client.get(url).send().await.map_err(RelayError::Transport)?;
    let status = response.status().as_u16();
    let content = response.text().await.map_err(RelayError::Body)?;

    Ok(RelayResult { status, content })
}
