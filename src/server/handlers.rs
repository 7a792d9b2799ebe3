//! HTTP request handlers for the web server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::AppState;
use crate::geocode::{enrich, GeocodeError, GeocodeResponse};

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Proxy a geocode lookup.
///
/// The path segment is the free-text place query; every inbound
/// query-string pair is forwarded upstream in wire order. The upstream
/// payload comes back with `city`/`state` added to each feature.
pub async fn geocode(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<GeocodeResponse>, GeocodeError> {
    let mut payload = state.geocoder.forward(&query, &params).await?;
    enrich(&mut payload);
    Ok(Json(payload))
}

/// Every upstream failure maps to the same 500 shape; the variants
/// only matter for logs.
impl IntoResponse for GeocodeError {
    fn into_response(self) -> Response {
        tracing::warn!("geocode request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
