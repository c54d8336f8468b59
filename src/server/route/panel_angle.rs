use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        panel_angle::{PanelAngleDto, PanelAngleInputDto, PatchPanelAngleDto},
    },
    server::{
        controller::panel_angle::PanelAngleController,
        error::AppError,
        model::panel_angle::{PanelAngle, PanelAngleResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

pub const PANEL_ANGLE_TAG: &str = "panel-angle";

impl RestResource for PanelAngleResource {
    const PATH: &'static str = "/panel-angles";
    const TAG: &'static str = PANEL_ANGLE_TAG;

    type Dto = PanelAngleDto;
    type InputDto = PanelAngleInputDto;
    type PatchDto = PatchPanelAngleDto;

    fn into_dto(domain: PanelAngle) -> PanelAngleDto {
        domain.into_dto()
    }
}

/// Get the recorded angles of a solar panel.
#[utoipa::path(
    get,
    path = "/panel-angles/get-panel-angles-after-solar-panel/{solar_panel_id}",
    tag = PANEL_ANGLE_TAG,
    params(
        ("solar_panel_id" = i32, Path, description = "Solar panel ID")
    ),
    responses(
        (status = 200, description = "Angles recorded for the solar panel", body = Vec<PanelAngleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_panel_angles_after_solar_panel(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let solar_panel_id = parse_path(path)?;

    let angles = PanelAngleController::new(&state.db)
        .find_by_solar_panel(solar_panel_id)
        .await?;

    Ok(Json(
        angles
            .into_iter()
            .map(PanelAngle::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<PanelAngleResource>().route(
        "/panel-angles/get-panel-angles-after-solar-panel/{solar_panel_id}",
        get(get_panel_angles_after_solar_panel),
    )
}
