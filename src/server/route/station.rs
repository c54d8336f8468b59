use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        station::{PatchStationDto, StationDto, StationInputDto},
    },
    server::{
        controller::station::StationController,
        error::AppError,
        model::station::{Station, StationResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

/// Tag for grouping station endpoints in OpenAPI documentation
pub const STATION_TAG: &str = "station";

impl RestResource for StationResource {
    const PATH: &'static str = "/stations";
    const TAG: &'static str = STATION_TAG;

    type Dto = StationDto;
    type InputDto = StationInputDto;
    type PatchDto = PatchStationDto;

    fn into_dto(domain: Station) -> StationDto {
        domain.into_dto()
    }
}

/// Get the stations installed at a location.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `location_id` - ID of the location
///
/// # Returns
/// - `200 OK` - Stations at the location, empty if none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/stations/get-stations-after-location/{location_id}",
    tag = STATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Stations installed at the location", body = Vec<StationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stations_after_location(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let location_id = parse_path(path)?;

    let stations = StationController::new(&state.db)
        .find_by_location(location_id)
        .await?;

    Ok(Json(
        stations
            .into_iter()
            .map(Station::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<StationResource>().route(
        "/stations/get-stations-after-location/{location_id}",
        get(get_stations_after_location),
    )
}
