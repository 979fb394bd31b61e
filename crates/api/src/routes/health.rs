use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::timestamp;
use crate::state::AppState;

/// Liveness probe payload, served bare (no `success` envelope) so load
/// balancers and uptime checks can consume it without unwrapping.
#[derive(Serialize)]
pub struct HealthStatus {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    /// Package version, for cheap deploy verification.
    pub version: &'static str,
    /// Result of the connectivity probe against the pool.
    pub db_healthy: bool,
    /// Probe time, same RFC 3339 format as the envelope timestamps.
    pub timestamp: String,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = partydex_db::health_check(&state.pool).await.is_ok();

    Json(HealthStatus {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        timestamp: timestamp(),
    })
}

/// Root-level probe routes; everything else mounts under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
