//! Domain types and pure logic for the PvP party manager.
//!
//! No I/O lives here: this crate owns the league and move catalogs, the
//! form/storage conversion layer, input validation, and the shared error
//! type. Persistence and HTTP layers build on top of it.

pub mod error;
pub mod league;
pub mod moves;
pub mod party;
pub mod types;

pub use error::CoreError;
pub use league::League;
pub use types::{DbId, Timestamp};
