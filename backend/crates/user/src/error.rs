//! User Error Types
//!
//! User-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::UNEXPECTED_ERROR, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    /// Malformed payload or path parameter
    #[error("{0}")]
    InvalidInput(AppError),

    #[error(transparent)]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error("user with a given email or username already exist")]
    DuplicateCredentials,

    #[error("data not found")]
    NotFound,

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidInput(err) => err.kind(),
            UserError::PasswordPolicy(_) | UserError::DuplicateCredentials => {
                ErrorKind::BadRequest
            }
            UserError::NotFound => ErrorKind::NotFound,
            UserError::PasswordHash(_) | UserError::Database(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::PasswordHash(e) => {
                tracing::error!(error = %e, "User password hashing failed");
            }
            UserError::DuplicateCredentials => {
                tracing::info!("Rejected duplicate email or username");
            }
            _ => {
                tracing::debug!(error = %self, "User request rejected");
            }
        }
    }
}

impl From<AppError> for UserError {
    fn from(err: AppError) -> Self {
        UserError::InvalidInput(err)
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Database(e) => AppError::from(e),
            UserError::InvalidInput(e) => e,
            UserError::PasswordHash(_) => AppError::internal(UNEXPECTED_ERROR),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_credentials_is_bad_request() {
        let app_err = AppError::from(UserError::DuplicateCredentials);
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(
            app_err.message(),
            "user with a given email or username already exist"
        );
    }

    #[test]
    fn test_password_policy_message_passes_through() {
        let err = UserError::from(PasswordPolicyError::TooShort { min: 7, actual: 3 });
        let app_err = AppError::from(err);
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(
            app_err.message(),
            "The password field must be at least 7 characters"
        );
    }

    #[test]
    fn test_hash_failure_hides_details() {
        let err = UserError::from(PasswordHashError::HashingFailed("out of memory".into()));
        let app_err = AppError::from(err);
        assert_eq!(app_err.status_code(), 500);
        assert_eq!(app_err.message(), "An unexpected error occurred");
    }

    #[test]
    fn test_not_found() {
        assert_eq!(AppError::from(UserError::NotFound).status_code(), 404);
    }
}
