//! Route definitions for the party resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::party;
use crate::state::AppState;

/// Routes mounted at `/parties`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /stats/leagues  -> league_stats
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(party::list).post(party::create))
        .route("/stats/leagues", get(party::league_stats))
        .route(
            "/{id}",
            get(party::get_by_id)
                .put(party::update)
                .delete(party::delete),
        )
}
