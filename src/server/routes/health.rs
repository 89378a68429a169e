//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// "ok" when the browser bundle is built, "missing" when the static
    /// fallback is served
    pub bundle: String,
    /// "ok" or "placeholder"
    pub profile_image: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The page can always be served, from the bundle or the fallback.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let bundle_ok = state.bundle_available();
    let image_ok = state.profile_image_path().is_file();

    Json(HealthResponse {
        status: if bundle_ok { "healthy" } else { "degraded" }.to_string(),
        bundle: if bundle_ok { "ok" } else { "missing" }.to_string(),
        profile_image: if image_ok { "ok" } else { "placeholder" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
