//! League catalog: the fixed set of competitive tiers a party can target.
//!
//! Stored league values are always one of these members; anything the user
//! types that is not in the catalog is persisted as [`League::Other`] with
//! the typed string kept in `custom_league`. The wire and database
//! representation is the exact Japanese display string.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A recognized league name, including the "その他" (Other) sentinel that
/// carries user-defined custom leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum League {
    #[serde(rename = "スーパーリーグ")]
    Super,
    #[serde(rename = "ハイパーリーグ")]
    Hyper,
    #[serde(rename = "マスターリーグ")]
    Master,
    #[serde(rename = "マスタークラシック")]
    MasterClassic,
    #[serde(rename = "プレミアカップ")]
    Premier,
    #[serde(rename = "エレメントカップ")]
    Element,
    #[serde(rename = "カントーカップ")]
    Kanto,
    #[serde(rename = "ジョウトカップ")]
    Johto,
    #[serde(rename = "シンオウカップ")]
    Sinnoh,
    #[serde(rename = "ホウエンカップ")]
    Hoenn,
    #[serde(rename = "ガラルカップ")]
    Galar,
    #[serde(rename = "アローラカップ")]
    Alola,
    #[serde(rename = "陽光カップ")]
    Sunshine,
    #[serde(rename = "ホリデーカップ")]
    Holiday,
    #[serde(rename = "ラブカップ")]
    Love,
    #[serde(rename = "リトルカップ")]
    Little,
    #[serde(rename = "ファンタジーカップ")]
    Fantasy,
    #[serde(rename = "ナイトメアカップ")]
    Nightmare,
    #[serde(rename = "フェアリーカップ")]
    Fairy,
    #[serde(rename = "ゴーストカップ")]
    Ghost,
    #[serde(rename = "ジャングルカップ")]
    Jungle,
    #[serde(rename = "サンダーカップ")]
    Thunder,
    #[serde(rename = "クロスカップ")]
    Cross,
    #[serde(rename = "その他")]
    Other,
}

/// Error for strings that are not a catalog league name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown league: {0}")]
pub struct UnknownLeague(pub String);

impl League {
    /// Every catalog member, in display order. [`League::Other`] is last.
    pub const ALL: [League; 24] = [
        League::Super,
        League::Hyper,
        League::Master,
        League::MasterClassic,
        League::Premier,
        League::Element,
        League::Kanto,
        League::Johto,
        League::Sinnoh,
        League::Hoenn,
        League::Galar,
        League::Alola,
        League::Sunshine,
        League::Holiday,
        League::Love,
        League::Little,
        League::Fantasy,
        League::Nightmare,
        League::Fairy,
        League::Ghost,
        League::Jungle,
        League::Thunder,
        League::Cross,
        League::Other,
    ];

    /// The stored/displayed Japanese name.
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Super => "スーパーリーグ",
            League::Hyper => "ハイパーリーグ",
            League::Master => "マスターリーグ",
            League::MasterClassic => "マスタークラシック",
            League::Premier => "プレミアカップ",
            League::Element => "エレメントカップ",
            League::Kanto => "カントーカップ",
            League::Johto => "ジョウトカップ",
            League::Sinnoh => "シンオウカップ",
            League::Hoenn => "ホウエンカップ",
            League::Galar => "ガラルカップ",
            League::Alola => "アローラカップ",
            League::Sunshine => "陽光カップ",
            League::Holiday => "ホリデーカップ",
            League::Love => "ラブカップ",
            League::Little => "リトルカップ",
            League::Fantasy => "ファンタジーカップ",
            League::Nightmare => "ナイトメアカップ",
            League::Fairy => "フェアリーカップ",
            League::Ghost => "ゴーストカップ",
            League::Jungle => "ジャングルカップ",
            League::Thunder => "サンダーカップ",
            League::Cross => "クロスカップ",
            League::Other => "その他",
        }
    }

    /// Parse a catalog league name. Unknown strings are not leagues — the
    /// caller decides whether they become a custom league or an error.
    pub fn parse(name: &str) -> Option<League> {
        League::ALL.iter().copied().find(|l| l.as_str() == name)
    }

    /// Whether `name` exactly matches a catalog member (the Other sentinel
    /// included).
    pub fn is_preset_name(name: &str) -> bool {
        League::parse(name).is_some()
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Row decoding: the `league` column is TEXT constrained to catalog values.
impl TryFrom<String> for League {
    type Error = UnknownLeague;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        League::parse(&value).ok_or(UnknownLeague(value))
    }
}
