use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        battery::{BatteryDto, BatteryInputDto, PatchBatteryDto},
    },
    server::{
        controller::battery::BatteryController,
        error::AppError,
        model::battery::{Battery, BatteryResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

/// Tag for grouping battery endpoints in OpenAPI documentation
pub const BATTERY_TAG: &str = "battery";

impl RestResource for BatteryResource {
    const PATH: &'static str = "/batteries";
    const TAG: &'static str = BATTERY_TAG;

    type Dto = BatteryDto;
    type InputDto = BatteryInputDto;
    type PatchDto = PatchBatteryDto;

    fn into_dto(domain: Battery) -> BatteryDto {
        domain.into_dto()
    }
}

/// Get the batteries installed at a station.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `station_id` - ID of the station
///
/// # Returns
/// - `200 OK` - Batteries of the station, empty if none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/batteries/get-batteries-after-station/{station_id}",
    tag = BATTERY_TAG,
    params(
        ("station_id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Batteries installed at the station", body = Vec<BatteryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batteries_after_station(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let station_id = parse_path(path)?;

    let batteries = BatteryController::new(&state.db)
        .find_by_station(station_id)
        .await?;

    Ok(Json(
        batteries
            .into_iter()
            .map(Battery::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<BatteryResource>().route(
        "/batteries/get-batteries-after-station/{station_id}",
        get(get_batteries_after_station),
    )
}
