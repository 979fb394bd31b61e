//! Request handlers for the party management API.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input through `partydex_core::party`, delegate to the
//! repositories in `partydex_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod diagnostics;
pub mod moves;
pub mod party;
