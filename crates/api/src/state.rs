use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through axum's `State` extractor.
///
/// Clones are cheap: the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the party database.
    pub pool: partydex_db::DbPool,
    /// Parsed server settings (bind address, CORS origins, timeouts).
    pub config: Arc<ServerConfig>,
}
