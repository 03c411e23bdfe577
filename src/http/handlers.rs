use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};

use crate::http::request::RelayParams;
use crate::http::response::{ApiError, InfoResponse};
use crate::relay::{relay_get, RelayResult};

/// `GET /`: static service banner.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}

/// `GET /request?url=...`: one outbound GET, reported as `{status, content}`.
///
/// A rejected query short-circuits before any network activity.
pub async fn relay(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<RelayResult>, ApiError> {
    let Query(pairs) = query?;
    let params = RelayParams::from_pairs(pairs).ok_or(ApiError::MissingUrl)?;

    let result = relay_get(&params.url).await.inspect_err(|e| {
        tracing::error!(url = %params.url, error = %e, "Relay failed");
    })?;

    Ok(Json(result))
}
