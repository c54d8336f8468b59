use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        battery_level::{BatteryLevelDto, BatteryLevelInputDto, PatchBatteryLevelDto},
    },
    server::{
        controller::battery_level::BatteryLevelController,
        error::AppError,
        model::battery_level::{BatteryLevel, BatteryLevelResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

pub const BATTERY_LEVEL_TAG: &str = "battery-level";

impl RestResource for BatteryLevelResource {
    const PATH: &'static str = "/battery-levels";
    const TAG: &'static str = BATTERY_LEVEL_TAG;

    type Dto = BatteryLevelDto;
    type InputDto = BatteryLevelInputDto;
    type PatchDto = PatchBatteryLevelDto;

    fn into_dto(domain: BatteryLevel) -> BatteryLevelDto {
        domain.into_dto()
    }
}

/// Get the charge readings of a battery.
#[utoipa::path(
    get,
    path = "/battery-levels/get-battery-levels-after-battery/{battery_id}",
    tag = BATTERY_LEVEL_TAG,
    params(
        ("battery_id" = i32, Path, description = "Battery ID")
    ),
    responses(
        (status = 200, description = "Charge readings of the battery", body = Vec<BatteryLevelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battery_levels_after_battery(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let battery_id = parse_path(path)?;

    let levels = BatteryLevelController::new(&state.db)
        .find_by_battery(battery_id)
        .await?;

    Ok(Json(
        levels
            .into_iter()
            .map(BatteryLevel::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<BatteryLevelResource>().route(
        "/battery-levels/get-battery-levels-after-battery/{battery_id}",
        get(get_battery_levels_after_battery),
    )
}
