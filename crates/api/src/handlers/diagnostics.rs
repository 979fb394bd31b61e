//! Database connectivity diagnostics.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

const MSG_DB_OK: &str = "データベース接続が成功しました！";

/// Connectivity probe result from `SELECT NOW(), version()`.
#[derive(Debug, Serialize)]
pub struct DbProbe {
    pub current_time: String,
    pub pg_version: String,
}

/// GET /api/test-db
///
/// Runs a trivial query and reports the database clock and version string.
/// Failures surface as the standard 500 envelope.
pub async fn test_db(State(state): State<AppState>) -> AppResult<Json<ApiResponse<DbProbe>>> {
    let (now, version): (DateTime<Utc>, String) = sqlx::query_as("SELECT NOW(), version()")
        .fetch_one(&state.pool)
        .await?;

    Ok(Json(ApiResponse::with_message(
        DbProbe {
            current_time: now.to_rfc3339(),
            pg_version: truncate_banner(&version),
        },
        MSG_DB_OK,
    )))
}

/// The full version banner is long; keep the informative prefix.
fn truncate_banner(version: &str) -> String {
    const MAX: usize = 50;
    if version.chars().count() > MAX {
        let head: String = version.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        version.to_owned()
    }
}
