//! Shared response envelope types for API handlers.
//!
//! Every `/api` response uses the `{ success, data | error, message?,
//! meta?, timestamp }` envelope the web client expects. Handlers build
//! [`ApiResponse`] / [`ListResponse`] / [`MessageResponse`] instead of
//! ad-hoc `serde_json::json!` blobs; error responses get the same shape
//! from `AppError::into_response`.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Current time as an RFC 3339 UTC string with millisecond precision,
/// e.g. `2025-08-01T12:34:56.789Z`. Every envelope carries one.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Standard success envelope: `{ success, data, message?, timestamp }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope around a payload, no confirmation message.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            timestamp: timestamp(),
        }
    }

    /// Envelope around a payload with a confirmation message
    /// (create/update responses).
    pub fn with_message(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message: Some(message),
            timestamp: timestamp(),
        }
    }
}

/// List envelope: `{ success, data, meta: { total, count }, timestamp }`.
///
/// `total` is the filtered row count in the database, `count` the number
/// of rows actually returned (they differ when a `limit` applies).
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: ListMeta,
    pub timestamp: String,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub total: i64,
    pub count: i64,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, total: i64) -> Self {
        let count = data.len() as i64;
        Self {
            success: true,
            data,
            meta: ListMeta { total, count },
            timestamp: timestamp(),
        }
    }
}

/// Data-less confirmation envelope: `{ success, message, timestamp }`.
///
/// Used by delete, where there is no entity left to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            timestamp: timestamp(),
        }
    }
}
