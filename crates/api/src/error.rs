use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use partydex_core::error::CoreError;
use serde_json::json;

use crate::response::timestamp;

/// User-facing message when the addressed party does not exist. Parties are
/// the only addressable resource, so not-found maps to this one message.
pub const MSG_PARTY_NOT_FOUND: &str = "パーティが見つかりません";

/// Generic fallback for unexpected server-side failures. Details are logged,
/// never echoed to the client.
const MSG_UNKNOWN_ERROR: &str = "不明なエラーが発生しました";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard `success: false`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `partydex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a user-facing message (malformed id, failed
    /// validation).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, MSG_PARTY_NOT_FOUND.to_owned())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({
            "success": false,
            "error": message,
            "timestamp": timestamp(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error to an HTTP status and user-facing message.
///
/// `RowNotFound` maps to 404; everything else is logged and becomes a
/// generic 500 so database details never reach clients.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, MSG_PARTY_NOT_FOUND.to_owned()),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_UNKNOWN_ERROR.to_owned(),
            )
        }
    }
}
