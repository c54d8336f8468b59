use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        owner_has_station::{
            OwnerHasStationDto, OwnerHasStationInputDto, PatchOwnerHasStationDto,
        },
    },
    server::{
        controller::owner_has_station::OwnerHasStationController,
        error::AppError,
        model::owner_has_station::{OwnerHasStation, OwnerHasStationResource},
        route::crud::{find_all, item_routes, RestResource},
        state::AppState,
        util::parse::{parse_json, parse_path},
    },
};

/// Tag for grouping ownership endpoints in OpenAPI documentation
pub const OWNER_HAS_STATION_TAG: &str = "owner-has-station";

impl RestResource for OwnerHasStationResource {
    const PATH: &'static str = "/owner-has-stations";
    const TAG: &'static str = OWNER_HAS_STATION_TAG;

    type Dto = OwnerHasStationDto;
    type InputDto = OwnerHasStationInputDto;
    type PatchDto = PatchOwnerHasStationDto;

    fn into_dto(domain: OwnerHasStation) -> OwnerHasStationDto {
        domain.into_dto()
    }
}

/// Record that an owner holds a share of a station.
///
/// # Returns
/// - `201 Created` - The created ownership share
/// - `400 Bad Request` - Malformed body, or owner or station does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/owner-has-stations",
    tag = OWNER_HAS_STATION_TAG,
    request_body = OwnerHasStationInputDto,
    responses(
        (status = 201, description = "Successfully created ownership share", body = OwnerHasStationDto),
        (status = 400, description = "Invalid data or unknown owner/station", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner_has_station(
    State(state): State<AppState>,
    payload: Result<Json<OwnerHasStationInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = parse_json(payload)?;

    let share = OwnerHasStationController::new(&state.db)
        .insert_owner_has_station(dto.into())
        .await?;

    Ok((StatusCode::CREATED, Json(share.into_dto())))
}

/// Get the owners of a station.
///
/// Answers with the ownership shares of the station; each carries the owner id and the
/// percentage held.
#[utoipa::path(
    get,
    path = "/owner-has-stations/get-owners-after-station/{station_id}",
    tag = OWNER_HAS_STATION_TAG,
    params(
        ("station_id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Ownership shares of the station", body = Vec<OwnerHasStationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_after_station(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let station_id = parse_path(path)?;

    let shares = OwnerHasStationController::new(&state.db)
        .find_owners_by_station(station_id)
        .await?;

    Ok(Json(
        shares
            .into_iter()
            .map(OwnerHasStation::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get the stations an owner holds shares of.
#[utoipa::path(
    get,
    path = "/owner-has-stations/get-stations-after-owner/{owner_id}",
    tag = OWNER_HAS_STATION_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Ownership shares held by the owner", body = Vec<OwnerHasStationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stations_after_owner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let owner_id = parse_path(path)?;

    let shares = OwnerHasStationController::new(&state.db)
        .find_stations_by_owner(owner_id)
        .await?;

    Ok(Json(
        shares
            .into_iter()
            .map(OwnerHasStation::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            OwnerHasStationResource::PATH,
            get(find_all::<OwnerHasStationResource>).post(create_owner_has_station),
        )
        .merge(item_routes::<OwnerHasStationResource>())
        .route(
            "/owner-has-stations/get-owners-after-station/{station_id}",
            get(get_owners_after_station),
        )
        .route(
            "/owner-has-stations/get-stations-after-owner/{owner_id}",
            get(get_stations_after_owner),
        )
}
