//! Error types for the TODO API
//!
//! This module defines error types for each layer:
//! - `TodoValidationError`: a decoded TODO violates its invariant
//! - `DomainError`: failures reported by the store port
//! - `AppError`: request-level errors, rendered as plain-text HTTP responses
//!
//! The `Display` output of `AppError` is the response body, so the messages
//! below are part of the wire contract.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::handlers::respond::respond_error;

/// Validation errors for a decoded TODO
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoValidationError {
    #[error("empty name")]
    EmptyName,

    #[error("empty category")]
    EmptyCategory,
}

/// Domain layer errors - raised by store adapters
///
/// The message is carried verbatim; callers never branch on the variant.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Database(String),

    #[error("store timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("method is not POST")]
    MethodNotAllowed,

    #[error("unauthenticated")]
    Unauthenticated,

    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("invalid todo: {0}")]
    InvalidTodo(#[from] TodoValidationError),

    #[error("db error: {0}")]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::InvalidJson(_) | AppError::InvalidTodo(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidJson(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Domain(e) => tracing::error!(error = %e, "Store rejected todo"),
            other => tracing::debug!(status = status.as_u16(), error = %other, "Rejected request"),
        }

        respond_error(status, &self.to_string())
    }
}
