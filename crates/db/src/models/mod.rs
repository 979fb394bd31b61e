//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching the database rows
//! - Query filter DTOs for list endpoints

pub mod party;

pub use party::{LeagueCount, Party, PartyDetail, PartyFilter, Pokemon};
