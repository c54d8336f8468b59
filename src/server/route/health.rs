use axum::{extract::State, response::IntoResponse, routing::get, Router};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, state::AppState},
};

pub const HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// Pings the database so that a lost connection is reported as unhealthy.
///
/// # Returns
/// - `200 OK` - `"OK"`
/// - `500 Internal Server Error` - Database unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are reachable", body = String),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok("OK")
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
