//! Party form <-> storage conversion and validation.
//!
//! The UI edits a party as three fixed pokemon slots plus a single
//! free-text league string. Persistence wants an ordered row array and a
//! normalized league (catalog member + optional custom league). The
//! conversions here are pure and lossless for everything the form can
//! express; validation returns the user-facing messages the client
//! displays verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::league::League;

/// Number of pokemon slots in every party.
pub const PARTY_SIZE: usize = 3;

/// Maximum length (in characters) for a custom league name.
pub const CUSTOM_LEAGUE_MAX_CHARS: usize = 100;

/// Validation message: a league must be selected.
pub const MSG_LEAGUE_REQUIRED: &str = "リーグの選択は必須です";
/// Validation message: custom league name must not be blank.
pub const MSG_CUSTOM_LEAGUE_EMPTY: &str = "カスタムリーグ名を入力してください";
/// Validation message: custom league name exceeds 100 characters.
pub const MSG_CUSTOM_LEAGUE_TOO_LONG: &str = "カスタムリーグ名は100文字以内で入力してください";
/// Validation message: a party carries exactly three pokemon rows.
pub const MSG_POKEMON_COUNT: &str = "ポケモンは3体指定してください";
/// Validation message: duplicate pokemon order values.
pub const MSG_POKEMON_ORDER_DUPLICATE: &str = "ポケモンの順序は重複できません";
/// Validation message: pokemon order outside 1..=3.
pub const MSG_POKEMON_ORDER_RANGE: &str = "ポケモンの順序は1-3の範囲で指定してください";

/// One pokemon slot as the UI edits it. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PokemonForm {
    #[serde(default)]
    pub normal_move: String,
    #[serde(default)]
    pub special_move1: String,
    #[serde(default)]
    pub special_move2: String,
}

/// A party as the UI form submits it.
///
/// A missing or JSON-`null` slot is a fully-empty slot, never an error;
/// the string fields default to `""` when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PartyForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub pokemon1: Option<PokemonForm>,
    #[serde(default)]
    pub pokemon2: Option<PokemonForm>,
    #[serde(default)]
    pub pokemon3: Option<PokemonForm>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cropped_image: String,
}

impl PartyForm {
    /// The three slots in order, with missing slots materialized as empty.
    pub fn slots(&self) -> [PokemonForm; 3] {
        [
            self.pokemon1.clone().unwrap_or_default(),
            self.pokemon2.clone().unwrap_or_default(),
            self.pokemon3.clone().unwrap_or_default(),
        ]
    }
}

/// One pokemon row in persistence shape. `None` means the move is not
/// set; empty strings never reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPokemon {
    pub pokemon_order: i16,
    pub normal_move: Option<String>,
    pub special_move_1: Option<String>,
    pub special_move_2: Option<String>,
}

impl StoredPokemon {
    /// A slot with no moves at the given order.
    pub fn empty(order: i16) -> Self {
        StoredPokemon {
            pokemon_order: order,
            normal_move: None,
            special_move_1: None,
            special_move_2: None,
        }
    }
}

/// A party in persistence shape, ready for the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInput {
    pub title: Option<String>,
    pub league: League,
    pub custom_league: Option<String>,
    pub party_image_url: Option<String>,
    pub cropped_image_url: Option<String>,
    pub pokemon: Vec<StoredPokemon>,
}

/// Partial update payload in form shape.
///
/// Scalar fields are tri-state: an absent key keeps the stored value,
/// JSON `null` clears it, a value replaces it. The three slot fields form
/// one group — touching any slot replaces all pokemon rows.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PartyFormPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub league: Option<Option<String>>,
    #[serde(default)]
    pub pokemon1: Option<PokemonForm>,
    #[serde(default)]
    pub pokemon2: Option<PokemonForm>,
    #[serde(default)]
    pub pokemon3: Option<PokemonForm>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cropped_image: Option<Option<String>>,
}

impl PartyFormPatch {
    /// Whether any of the three slot fields is present.
    pub fn touches_pokemon(&self) -> bool {
        self.pokemon1.is_some() || self.pokemon2.is_some() || self.pokemon3.is_some()
    }
}

/// Storage-side patch built from a [`PartyFormPatch`].
///
/// Outer `None` leaves the column untouched; `Some(None)` writes NULL.
/// `league` and `custom_league` are always set together, so the
/// custom-league invariant holds after any update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyUpdate {
    pub title: Option<Option<String>>,
    pub league: Option<League>,
    pub custom_league: Option<Option<String>>,
    pub party_image_url: Option<Option<String>>,
    pub cropped_image_url: Option<Option<String>>,
    pub pokemon: Option<Vec<StoredPokemon>>,
}

impl PartyUpdate {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.league.is_none()
            && self.custom_league.is_none()
            && self.party_image_url.is_none()
            && self.cropped_image_url.is_none()
            && self.pokemon.is_none()
    }
}

/// Distinguish an absent key from an explicit JSON `null`:
/// `#[serde(default)]` covers absence (outer `None`), and this
/// deserializer wraps any present value, null included, in `Some`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Empty strings persist as NULL, anything else verbatim.
fn text_or_null(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Images are kept only when non-blank after trimming; the stored value
/// is the original, untrimmed string.
fn image_or_null(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn slot_to_row(slot: &PokemonForm, order: i16) -> StoredPokemon {
    StoredPokemon {
        pokemon_order: order,
        normal_move: text_or_null(&slot.normal_move),
        special_move_1: text_or_null(&slot.special_move1),
        special_move_2: text_or_null(&slot.special_move2),
    }
}

/// Split a free-text league string into its stored pair: catalog names
/// store as themselves with no custom league, anything else stores as
/// [`League::Other`] with the text preserved as the custom league.
pub fn normalize_league(league: &str) -> (League, Option<String>) {
    match League::parse(league) {
        Some(preset) => (preset, None),
        None => (League::Other, text_or_null(league)),
    }
}

/// The display string for a stored league pair: a non-empty custom
/// league behind the Other sentinel displays as the custom text,
/// everything else as the catalog name.
pub fn display_league(league: League, custom_league: Option<&str>) -> String {
    match custom_league {
        Some(custom) if league == League::Other && !custom.is_empty() => custom.to_owned(),
        _ => league.as_str().to_owned(),
    }
}

/// Convert a submitted form into persistence shape.
///
/// Always emits exactly three pokemon rows with orders 1,2,3 — a slot
/// with no moves still becomes a row.
pub fn form_to_input(form: &PartyForm) -> PartyInput {
    let (league, custom_league) = normalize_league(&form.league);

    let pokemon = form
        .slots()
        .iter()
        .zip(1..)
        .map(|(slot, order)| slot_to_row(slot, order))
        .collect();

    PartyInput {
        title: text_or_null(&form.title),
        league,
        custom_league,
        party_image_url: image_or_null(&form.image),
        cropped_image_url: image_or_null(&form.cropped_image),
        pokemon,
    }
}

/// Convert persistence shape back into the form shape.
///
/// Rows map to slots by their order value; orders absent from the input
/// come back as empty slots, so the result always has all three.
pub fn input_to_form(input: &PartyInput) -> PartyForm {
    let slot = |order: i16| -> PokemonForm {
        input
            .pokemon
            .iter()
            .find(|row| row.pokemon_order == order)
            .map(|row| PokemonForm {
                normal_move: row.normal_move.clone().unwrap_or_default(),
                special_move1: row.special_move_1.clone().unwrap_or_default(),
                special_move2: row.special_move_2.clone().unwrap_or_default(),
            })
            .unwrap_or_default()
    };

    PartyForm {
        title: input.title.clone().unwrap_or_default(),
        league: display_league(input.league, input.custom_league.as_deref()),
        pokemon1: Some(slot(1)),
        pokemon2: Some(slot(2)),
        pokemon3: Some(slot(3)),
        image: input.party_image_url.clone().unwrap_or_default(),
        cropped_image: input.cropped_image_url.clone().unwrap_or_default(),
    }
}

/// Convert a partial form patch into a storage-side [`PartyUpdate`].
///
/// A present league is normalized exactly like on create, and writes the
/// `custom_league` column in the same update so switching between preset
/// and custom leagues can never leave a stale custom name behind.
pub fn patch_to_update(patch: &PartyFormPatch) -> PartyUpdate {
    let (league, custom_league) = match &patch.league {
        Some(Some(name)) => {
            let (league, custom) = normalize_league(name);
            (Some(league), Some(custom))
        }
        // A cleared league never passes validation; treat it as untouched
        // so an unvalidated caller cannot null a mandatory column.
        _ => (None, None),
    };

    PartyUpdate {
        title: patched_text(&patch.title),
        league,
        custom_league,
        party_image_url: patched_image(&patch.image),
        cropped_image_url: patched_image(&patch.cropped_image),
        pokemon: patch_pokemon_rows(patch),
    }
}

fn patched_text(field: &Option<Option<String>>) -> Option<Option<String>> {
    field
        .as_ref()
        .map(|value| value.as_deref().and_then(text_or_null))
}

fn patched_image(field: &Option<Option<String>>) -> Option<Option<String>> {
    field
        .as_ref()
        .map(|value| value.as_deref().and_then(image_or_null))
}

/// Materialize the full three-slot replacement when the patch touches
/// any slot; `None` when no slot field is present (rows untouched).
fn patch_pokemon_rows(patch: &PartyFormPatch) -> Option<Vec<StoredPokemon>> {
    if !patch.touches_pokemon() {
        return None;
    }

    let slots = [
        patch.pokemon1.clone().unwrap_or_default(),
        patch.pokemon2.clone().unwrap_or_default(),
        patch.pokemon3.clone().unwrap_or_default(),
    ];

    Some(
        slots
            .iter()
            .zip(1..)
            .map(|(slot, order)| slot_to_row(slot, order))
            .collect(),
    )
}

fn validate_league_name(league: &str, errors: &mut Vec<String>) {
    if league.is_empty() {
        errors.push(MSG_LEAGUE_REQUIRED.to_owned());
    } else if !League::is_preset_name(league) {
        let chars = league.trim().chars().count();
        if chars == 0 {
            errors.push(MSG_CUSTOM_LEAGUE_EMPTY.to_owned());
        } else if chars > CUSTOM_LEAGUE_MAX_CHARS {
            errors.push(MSG_CUSTOM_LEAGUE_TOO_LONG.to_owned());
        }
    }
}

/// Validate a full form submission. Returns the user-facing messages;
/// empty means valid. Move contents are never validated — a party with
/// no moves at all is acceptable.
pub fn validate_form(form: &PartyForm) -> Vec<String> {
    let mut errors = Vec::new();
    validate_league_name(&form.league, &mut errors);
    errors
}

/// Validate a partial update. Only fields present in the patch are
/// checked; an explicit `league: null` is rejected because the league is
/// mandatory and cannot be cleared.
pub fn validate_patch(patch: &PartyFormPatch) -> Vec<String> {
    let mut errors = Vec::new();
    match &patch.league {
        None => {}
        Some(None) => errors.push(MSG_LEAGUE_REQUIRED.to_owned()),
        Some(Some(name)) => validate_league_name(name, &mut errors),
    }
    errors
}

/// Guard for the three-slot invariant: exactly [`PARTY_SIZE`] rows whose
/// orders are `{1,2,3}` with no duplicates. Adapter output always
/// passes; this protects hand-built inputs and the update path.
pub fn validate_pokemon_rows(rows: &[StoredPokemon]) -> Result<(), CoreError> {
    if rows.len() != PARTY_SIZE {
        return Err(CoreError::Validation(MSG_POKEMON_COUNT.to_owned()));
    }

    let mut seen = [false; PARTY_SIZE];
    for row in rows {
        if !(1..=PARTY_SIZE as i16).contains(&row.pokemon_order) {
            return Err(CoreError::Validation(MSG_POKEMON_ORDER_RANGE.to_owned()));
        }
        let idx = (row.pokemon_order - 1) as usize;
        if seen[idx] {
            return Err(CoreError::Validation(
                MSG_POKEMON_ORDER_DUPLICATE.to_owned(),
            ));
        }
        seen[idx] = true;
    }

    Ok(())
}

/// Validate a freshly-converted [`PartyInput`] before it reaches the
/// repository.
pub fn validate_input(input: &PartyInput) -> Result<(), CoreError> {
    validate_pokemon_rows(&input.pokemon)
}
