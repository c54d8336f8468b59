use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        location::{LocationDto, LocationInputDto, PatchLocationDto},
    },
    server::{
        controller::location::LocationController,
        error::AppError,
        model::location::{Location, LocationResource},
        route::crud::{find_all, item_routes, RestResource},
        state::AppState,
        util::parse::parse_json,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub const LOCATION_TAG: &str = "location";

impl RestResource for LocationResource {
    const PATH: &'static str = "/locations";
    const TAG: &'static str = LOCATION_TAG;

    type Dto = LocationDto;
    type InputDto = LocationInputDto;
    type PatchDto = PatchLocationDto;

    fn into_dto(domain: Location) -> LocationDto {
        domain.into_dto()
    }
}

/// Create a location.
///
/// Goes through the dedicated location insert rather than the generic create.
///
/// # Returns
/// - `201 Created` - The created location
/// - `400 Bad Request` - Missing or malformed fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/locations",
    tag = LOCATION_TAG,
    request_body = LocationInputDto,
    responses(
        (status = 201, description = "Successfully created location", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    payload: Result<Json<LocationInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = parse_json(payload)?;

    let location = LocationController::new(&state.db)
        .insert_location(dto.into())
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            LocationResource::PATH,
            get(find_all::<LocationResource>).post(create_location),
        )
        .merge(item_routes::<LocationResource>())
}
