//! Handlers for the `/api/parties` resource.
//!
//! Request bodies are the form-shaped types from `partydex_core::party`
//! (the same shape the web client edits); handlers validate them, run them
//! through the adapter, and hand the storage-shaped result to [`PartyRepo`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use partydex_core::error::CoreError;
use partydex_core::party::{self, PartyForm, PartyFormPatch};
use partydex_core::types::DbId;
use partydex_db::models::{LeagueCount, Party, PartyDetail, PartyFilter};
use partydex_db::repositories::PartyRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::{ApiResponse, ListResponse, MessageResponse};
use crate::state::AppState;

const MSG_INVALID_PARTY_ID: &str = "無効なパーティIDです";
const MSG_PARTY_CREATED: &str = "パーティが正常に作成されました";
const MSG_PARTY_UPDATED: &str = "パーティが正常に更新されました";
const MSG_PARTY_DELETED: &str = "パーティが正常に削除されました";

/// Parse a path id as a canonical hyphenated UUID.
///
/// The uuid crate also accepts simple, braced, and urn forms; those are
/// rejected here so lookups only run against the canonical format.
fn parse_party_id(raw: &str) -> Result<DbId, AppError> {
    if raw.len() == 36 {
        if let Ok(id) = Uuid::parse_str(raw) {
            return Ok(id);
        }
    }
    Err(AppError::BadRequest(MSG_INVALID_PARTY_ID.to_owned()))
}

/// GET /api/parties?league=&title=&limit=
///
/// Party summaries (no pokemon rows), newest first, with `meta.total`
/// counted under the same filter.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PartyFilter>,
) -> AppResult<Json<ListResponse<Party>>> {
    let parties = PartyRepo::find_all(&state.pool, &filter).await?;
    let total = PartyRepo::count(&state.pool, &filter).await?;
    Ok(Json(ListResponse::new(parties, total)))
}

/// GET /api/parties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<PartyDetail>>> {
    let id = parse_party_id(&id)?;
    let detail = PartyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Party",
            id,
        }))?;
    Ok(Json(ApiResponse::data(detail)))
}

/// POST /api/parties
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<PartyForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<PartyDetail>>)> {
    let errors = party::validate_form(&form);
    if !errors.is_empty() {
        return Err(AppError::BadRequest(errors.join(", ")));
    }

    let input = party::form_to_input(&form);
    party::validate_input(&input)?;

    let detail = PartyRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(detail, MSG_PARTY_CREATED)),
    ))
}

/// PUT /api/parties/{id}
///
/// Body fields are tri-state: an absent field leaves the column untouched,
/// JSON null clears it, a value replaces it. Pokemon slots are replaced as
/// a full 3-row group whenever any slot field is present.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PartyFormPatch>,
) -> AppResult<Json<ApiResponse<PartyDetail>>> {
    let id = parse_party_id(&id)?;

    let errors = party::validate_patch(&patch);
    if !errors.is_empty() {
        return Err(AppError::BadRequest(errors.join(", ")));
    }

    let update = party::patch_to_update(&patch);
    if let Some(rows) = &update.pokemon {
        party::validate_pokemon_rows(rows)?;
    }

    let detail = PartyRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Party",
            id,
        }))?;
    Ok(Json(ApiResponse::with_message(detail, MSG_PARTY_UPDATED)))
}

/// DELETE /api/parties/{id}
///
/// Pokemon rows go with the party via `ON DELETE CASCADE`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_party_id(&id)?;
    let deleted = PartyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new(MSG_PARTY_DELETED)))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Party",
            id,
        }))
    }
}

/// GET /api/parties/stats/leagues
pub async fn league_stats(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<LeagueCount>>>> {
    let stats = PartyRepo::league_stats(&state.pool).await?;
    Ok(Json(ApiResponse::data(stats)))
}
