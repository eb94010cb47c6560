//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Cache stats (fast, passive)
//! - `/readyz` - Readiness probe (round-trip to the record store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Cache stats.
///
/// Reports how many RSVPs are currently cached without touching the store.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.cache.len().await {
        Ok(cached) => (
            StatusCode::OK,
            Json(serde_json::json!({ "cachedRsvps": cached })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// GET /readyz - Readiness probe.
///
/// Pings the record store. Returns 200 if it answers, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.rsvp_repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "healthy": true })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
