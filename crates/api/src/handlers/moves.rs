//! Handler serving the static move catalog.

use axum::Json;
use partydex_core::moves;
use serde::Serialize;

use crate::response::ApiResponse;

/// Move catalog payload: the two static name lists the client uses for
/// input suggestions.
#[derive(Debug, Serialize)]
pub struct MoveCatalog {
    pub normal: &'static [&'static str],
    pub special: &'static [&'static str],
}

/// GET /api/moves
pub async fn list() -> Json<ApiResponse<MoveCatalog>> {
    Json(ApiResponse::data(MoveCatalog {
        normal: moves::NORMAL_MOVES,
        special: moves::SPECIAL_MOVES,
    }))
}
