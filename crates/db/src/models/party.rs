//! Party and pokemon entity models.

use partydex_core::league::League;
use partydex_core::party::{self, PartyForm, PartyInput, StoredPokemon};
use partydex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// A party row from the `parties` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Party {
    pub id: DbId,
    pub title: Option<String>,
    /// TEXT in the database, constrained to the league catalog.
    #[sqlx(try_from = "String")]
    pub league: League,
    /// Set only when `league` is the Other sentinel.
    pub custom_league: Option<String>,
    pub party_image_url: Option<String>,
    pub cropped_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A pokemon row from the `pokemon` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Pokemon {
    pub id: DbId,
    pub party_id: DbId,
    pub pokemon_order: i16,
    pub normal_move: Option<String>,
    pub special_move_1: Option<String>,
    pub special_move_2: Option<String>,
    pub created_at: Timestamp,
}

/// A party with its pokemon rows attached, ordered by `pokemon_order`.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PartyDetail {
    #[serde(flatten)]
    pub party: Party,
    pub pokemon: Vec<Pokemon>,
}

impl PartyDetail {
    /// Rebuild the storage-input shape from this detail (server-assigned
    /// ids and timestamps dropped).
    pub fn to_input(&self) -> PartyInput {
        PartyInput {
            title: self.party.title.clone(),
            league: self.party.league,
            custom_league: self.party.custom_league.clone(),
            party_image_url: self.party.party_image_url.clone(),
            cropped_image_url: self.party.cropped_image_url.clone(),
            pokemon: self
                .pokemon
                .iter()
                .map(|row| StoredPokemon {
                    pokemon_order: row.pokemon_order,
                    normal_move: row.normal_move.clone(),
                    special_move_1: row.special_move_1.clone(),
                    special_move_2: row.special_move_2.clone(),
                })
                .collect(),
        }
    }

    /// The UI form shape for this party: league display string resolved,
    /// missing slots synthesized as empty.
    pub fn to_form(&self) -> PartyForm {
        party::input_to_form(&self.to_input())
    }
}

/// Per-league party count for the stats endpoint.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct LeagueCount {
    #[sqlx(try_from = "String")]
    pub league: League,
    pub count: i64,
}

/// Optional filters for party list/count queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartyFilter {
    /// Exact-match league string.
    pub league: Option<String>,
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    pub limit: Option<i64>,
}
