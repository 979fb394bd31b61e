pub mod health;
pub mod party;

use axum::routing::get;
use axum::Router;

use crate::handlers::{diagnostics, moves};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /parties                 list, create
/// /parties/{id}            get, update, delete
/// /parties/stats/leagues   per-league party counts
///
/// /moves                   static move catalog
/// /test-db                 database connectivity probe
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Party management.
        .nest("/parties", party::router())
        // Move catalog for input suggestions.
        .route("/moves", get(moves::list))
        // Connectivity diagnostics.
        .route("/test-db", get(diagnostics::test_db))
}
