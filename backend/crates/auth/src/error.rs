//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::UNEXPECTED_ERROR, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

use crate::domain::signing::SigningError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Failure of one refresh-token issuance step. Each step is terminal.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(#[from] SigningError),

    #[error("failed to hash token: {0}")]
    Hash(#[from] PasswordHashError),

    #[error("failed to save token: {0}")]
    Save(#[source] Box<AuthError>),

    #[error("failed to save token: deadline exceeded")]
    SaveTimeout,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Malformed payload
    #[error("{0}")]
    InvalidInput(AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Token(_) => ErrorKind::BadRequest,
            AuthError::InvalidInput(err) => err.kind(),
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Refresh token issuance failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidInput(_) => {
                tracing::debug!(error = %self, "Auth request rejected");
            }
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::InvalidInput(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => AppError::from(e),
            AuthError::InvalidInput(e) => e,
            AuthError::Internal(_) => AppError::internal(UNEXPECTED_ERROR),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
