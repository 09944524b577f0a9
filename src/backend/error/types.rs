//! Backend Error Types
//!
//! The error taxonomy of the HTTP boundary:
//!
//! - `NotFound` - referenced order/document/component does not exist (404)
//! - `Validation` - rejected input, including workflow violations (400)
//! - `Database` - store failures (500)
//! - `Internal` - anything else unexpected (500)

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::orders::workflow::WorkflowError;
use crate::shared::SharedError;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced entity does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Invalid input or a rejected workflow step
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { .. } => Self::validation(err.to_string()),
            SharedError::SerializationError { .. } => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::NotFound("order").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::validation("bad input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_workflow_error_maps_to_validation() {
        let err: ApiError = WorkflowError::MissingComment { action: "revision" }.into();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("order").to_string(), "order not found");
    }
}
