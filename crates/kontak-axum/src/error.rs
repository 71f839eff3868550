//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` and `RepositoryError` to HTTP status codes
//! and renders them as HTML error pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use kontak_core::{CoreError, RepositoryError};
use thiserror::Error;

use crate::views;

/// Message shown for failures whose detail stays in the logs.
const INTERNAL_MESSAGE: &str = "Something went wrong. Try again later.";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Conflict(msg) => {
                tracing::debug!(status = status.as_u16(), "{}", self);
                msg.as_str()
            }
            Self::Internal(detail) => {
                tracing::error!(%detail, "Request failed");
                INTERNAL_MESSAGE
            }
        };

        (status, Html(views::pages::error(status, message))).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(errors) => Self::BadRequest(errors.to_string()),
            CoreError::NotFound(msg) => Self::NotFound(format!("{msg} not found")),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(format!("{msg} not found")),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(format!("{msg} already exists")),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
        }
    }
}
