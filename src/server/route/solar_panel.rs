use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        solar_panel::{PatchSolarPanelDto, SolarPanelDto, SolarPanelInputDto},
    },
    server::{
        controller::solar_panel::SolarPanelController,
        error::AppError,
        model::solar_panel::{SolarPanel, SolarPanelResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

/// Tag for grouping solar panel endpoints in OpenAPI documentation
pub const SOLAR_PANEL_TAG: &str = "solar-panel";

impl RestResource for SolarPanelResource {
    const PATH: &'static str = "/solar-panels";
    const TAG: &'static str = SOLAR_PANEL_TAG;

    type Dto = SolarPanelDto;
    type InputDto = SolarPanelInputDto;
    type PatchDto = PatchSolarPanelDto;

    fn into_dto(domain: SolarPanel) -> SolarPanelDto {
        domain.into_dto()
    }
}

/// Get the solar panels of a panel type.
///
/// # Returns
/// - `200 OK` - Panels of the type, empty if none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/solar-panels/get-solar-panels-after-panel-type/{panel_type_id}",
    tag = SOLAR_PANEL_TAG,
    params(
        ("panel_type_id" = i32, Path, description = "Panel type ID")
    ),
    responses(
        (status = 200, description = "Solar panels of the panel type", body = Vec<SolarPanelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_solar_panels_after_panel_type(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let panel_type_id = parse_path(path)?;

    let panels = SolarPanelController::new(&state.db)
        .find_by_panel_type(panel_type_id)
        .await?;

    Ok(Json(
        panels
            .into_iter()
            .map(SolarPanel::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get the solar panels mounted at a station.
///
/// # Returns
/// - `200 OK` - Panels of the station, empty if none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/solar-panels/get-solar-panels-after-station/{station_id}",
    tag = SOLAR_PANEL_TAG,
    params(
        ("station_id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Solar panels mounted at the station", body = Vec<SolarPanelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_solar_panels_after_station(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let station_id = parse_path(path)?;

    let panels = SolarPanelController::new(&state.db)
        .find_by_station(station_id)
        .await?;

    Ok(Json(
        panels
            .into_iter()
            .map(SolarPanel::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<SolarPanelResource>()
        .route(
            "/solar-panels/get-solar-panels-after-panel-type/{panel_type_id}",
            get(get_solar_panels_after_panel_type),
        )
        .route(
            "/solar-panels/get-solar-panels-after-station/{station_id}",
            get(get_solar_panels_after_station),
        )
}
