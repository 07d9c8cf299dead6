//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from library errors to [`AppError`] and the
//! envelope rendering of [`AppError`] for axum.

use super::app_error::AppError;

/// Client-facing message for failures whose details must stay server-side.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal(UNEXPECTED_ERROR).with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("data not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23505") => {
                        AppError::bad_request("user with a given email or username already exist")
                    }
                    Some("23503") => AppError::bad_request("invalid reference code"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23514") => AppError::bad_request("Check constraint violation"),
                    Some("42P01") => AppError::internal("database error: invalid table"),
                    Some("P0002") => AppError::not_found("data not found"),
                    Some("53000" | "53100" | "53200" | "53300") => {
                        AppError::service_unavailable("Database resource exhausted")
                    }
                    Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal(UNEXPECTED_ERROR),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal(UNEXPECTED_ERROR).with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::ApiResponse;
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let body = ApiResponse::<()>::failure(self.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_err: Result<i64, _> = "abc".parse();
        let app_err: AppError = parse_err.unwrap_err().into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_is_404() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.status_code(), 404);
        assert_eq!(app_err.message(), "data not found");
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_timeout_is_503() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_renders_envelope() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("data not found").into_response();
        assert_eq!(response.status().as_u16(), 404);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "data not found");
        assert!(body["data"].is_null());
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_internal_error_hides_details() {
        use axum::response::IntoResponse;

        let io_err = std::io::Error::other("connection reset by peer");
        let response = AppError::internal(UNEXPECTED_ERROR)
            .with_source(io_err)
            .into_response();
        assert_eq!(response.status().as_u16(), 500);
    }
}
