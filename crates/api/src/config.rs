/// Runtime settings, read from the environment once at startup.
///
/// Every knob has a development-friendly default so a bare `cargo run`
/// works against a local database; deployments override via env vars.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`; the Vite dev client on 5173 proxies
    /// API calls here).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` entry enables the permissive any-origin mode.
    pub cors_origins: Vec<String>,
    /// Pool size cap for the database (default: `5`).
    pub db_max_connections: u32,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read every setting, falling back to its default when the variable
    /// is absent. A present-but-unparseable value aborts startup.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            db_max_connections,
            request_timeout_secs,
        }
    }
}
