//! Story Error Types
//!
//! Story-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::UNEXPECTED_ERROR, kind::ErrorKind};
use thiserror::Error;

use crate::domain::classification::StoryValidationError;

pub type StoryResult<T> = Result<T, StoryError>;

#[derive(Debug, Error)]
pub enum StoryError {
    /// Word count outside the band of the declared type, or unknown type
    #[error(transparent)]
    Classification(#[from] StoryValidationError),

    /// Malformed payload or path parameter
    #[error("{0}")]
    InvalidInput(AppError),

    #[error("data not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Row that cannot be mapped back to the domain
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoryError::Classification(_) => ErrorKind::BadRequest,
            StoryError::InvalidInput(err) => err.kind(),
            StoryError::NotFound => ErrorKind::NotFound,
            StoryError::Database(_) | StoryError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StoryError::Database(e) => {
                tracing::error!(error = %e, "Story database error");
            }
            StoryError::Internal(msg) => {
                tracing::error!(message = %msg, "Story internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Story request rejected");
            }
        }
    }
}

impl From<AppError> for StoryError {
    fn from(err: AppError) -> Self {
        StoryError::InvalidInput(err)
    }
}

impl From<StoryError> for AppError {
    fn from(err: StoryError) -> Self {
        match err {
            StoryError::Database(e) => AppError::from(e),
            StoryError::InvalidInput(e) => e,
            StoryError::Internal(_) => AppError::internal(UNEXPECTED_ERROR),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for StoryError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
