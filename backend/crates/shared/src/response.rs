//! Response Envelope
//!
//! Every endpoint answers with `{ "success": bool, "message": string, "data": any|null }`.

use serde::{Deserialize, Serialize};

/// Message carried by every successful response.
pub const SUCCESS_MESSAGE: &str = "Operation successful.";

/// JSON envelope shared by success and failure responses.
///
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let body = serde_json::to_value(ApiResponse::success(serde_json::json!({ "id": 1 }))).unwrap();
/// assert_eq!(body["success"], true);
/// assert_eq!(body["data"]["id"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    /// Failure envelope; `data` serializes as `null`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}
