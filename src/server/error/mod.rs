//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the single error type that
//! travels from the data layer through services and controllers to the route handlers
//! unchanged; only `IntoResponse` decides the status code.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// `NotFound` and `BadRequest` carry client-facing messages. Every other variant is
/// treated as an internal failure and answered with a generic 500 response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations and missing records are translated into `BadRequest` and
    /// `NotFound` by the `From<DbErr>` conversion before they reach this variant.
    #[error(transparent)]
    DbErr(DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message. Raised for malformed
    /// payloads, unknown query values and foreign key or unique constraint violations.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts database errors, classifying constraint violations as client errors.
///
/// Foreign keys are enforced by the store, so a payload referencing a row that does not
/// exist surfaces here as a `ForeignKeyConstraintViolation` and becomes a 400 response.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return AppError::BadRequest(format!("Referenced record does not exist: {}", msg))
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return AppError::BadRequest(format!("Record already exists: {}", msg))
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            DbErr::RecordNotUpdated => AppError::NotFound("Record not found".to_string()),
            err => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_not_found_to_404() {
        let response = AppError::NotFound("Station with id 1 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn maps_bad_request_to_400() {
        let response = AppError::BadRequest("Invalid period".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn maps_database_errors_to_500() {
        let response = AppError::from(DbErr::Custom("connection lost".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn maps_io_errors_to_500() {
        let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn converts_record_not_found_into_not_found() {
        let err = AppError::from(DbErr::RecordNotFound("Station".to_string()));
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
