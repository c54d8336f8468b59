use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};

use crate::server::error::AppError;

/// Unwraps a JSON request body, turning extractor rejections into a 400 response.
///
/// Axum answers malformed bodies with its own status codes (415, 422). Handlers accept
/// `Result<Json<T>, JsonRejection>` and pass it through here so that every payload error
/// is reported with the application's error body.
///
/// # Arguments
/// - `payload` - The extractor result for the request body
///
/// # Returns
/// - `Ok(T)` - The deserialized payload
/// - `Err(AppError::BadRequest)` - The body was missing, not JSON or missing required fields
pub fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// Unwraps a path parameter, turning extractor rejections into a 400 response.
///
/// Covers ids that are not numbers or do not fit an `i32`, which axum would otherwise
/// answer with a plain text body.
pub fn parse_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
