//! Data models shared across database access and API handlers.

use axum::http::StatusCode;
use serde::Serialize;

/// Body of every API response.
///
/// Clients read `details.message` for feedback and `details.data` for the
/// payload, mirroring the envelope the leave portal has always used.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub details: ApiDetails<T>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDetails<T: Serialize> {
    pub message: String,
    pub data: T,
    pub status_code: String,
    pub error_code: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            details: ApiDetails {
                message: message.into(),
                data,
                status_code: status.as_str().to_string(),
                error_code: None,
            },
        }
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }
}

impl ApiResponse<Option<serde_json::Value>> {
    pub fn error(
        status: StatusCode,
        error_code: &str,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        let mut response = Self::new(status, message, data);
        response.details.error_code = Some(error_code.to_string());
        response
    }
}

pub mod leave_balance;
pub mod leave_request;
pub mod project;
pub mod user;
