use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        panel_production::{PanelProductionDto, PanelProductionInputDto, PatchPanelProductionDto},
    },
    server::{
        controller::panel_production::PanelProductionController,
        error::AppError,
        model::panel_production::{PanelProduction, PanelProductionResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

pub const PANEL_PRODUCTION_TAG: &str = "panel-production";

impl RestResource for PanelProductionResource {
    const PATH: &'static str = "/panel-productions";
    const TAG: &'static str = PANEL_PRODUCTION_TAG;

    type Dto = PanelProductionDto;
    type InputDto = PanelProductionInputDto;
    type PatchDto = PatchPanelProductionDto;

    fn into_dto(domain: PanelProduction) -> PanelProductionDto {
        domain.into_dto()
    }
}

/// Get the production records of a solar panel.
///
/// # Returns
/// - `200 OK` - Production records of the panel, empty if none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/panel-productions/get-panel-productions-after-solar-panel/{solar_panel_id}",
    tag = PANEL_PRODUCTION_TAG,
    params(
        ("solar_panel_id" = i32, Path, description = "Solar panel ID")
    ),
    responses(
        (status = 200, description = "Production recorded for the solar panel", body = Vec<PanelProductionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_panel_productions_after_solar_panel(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let solar_panel_id = parse_path(path)?;

    let productions = PanelProductionController::new(&state.db)
        .find_by_solar_panel(solar_panel_id)
        .await?;

    Ok(Json(
        productions
            .into_iter()
            .map(PanelProduction::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<PanelProductionResource>().route(
        "/panel-productions/get-panel-productions-after-solar-panel/{solar_panel_id}",
        get(get_panel_productions_after_solar_panel),
    )
}
