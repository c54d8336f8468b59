use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::{
        api::ErrorDto,
        energy_sale::{EnergySaleDto, EnergySaleInputDto, EnergySoldDto, PatchEnergySaleDto},
    },
    server::{
        controller::energy_sale::EnergySaleController,
        error::AppError,
        model::energy_sale::{EnergySale, EnergySaleResource, EnergySoldByPeriod, SalePeriod},
        route::crud::{crud_routes, RestResource},
        state::AppState,
        util::parse::parse_path,
    },
};

/// Tag for grouping energy sale endpoints in OpenAPI documentation
pub const ENERGY_SALE_TAG: &str = "energy-sale";

impl RestResource for EnergySaleResource {
    const PATH: &'static str = "/energy-sales";
    const TAG: &'static str = ENERGY_SALE_TAG;

    type Dto = EnergySaleDto;
    type InputDto = EnergySaleInputDto;
    type PatchDto = PatchEnergySaleDto;

    fn into_dto(domain: EnergySale) -> EnergySaleDto {
        domain.into_dto()
    }
}

/// Get the energy sales of a station.
///
/// # Returns
/// - `200 OK` - Sales of the station, empty if none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/energy-sales/get-energy-sales-after-station/{station_id}",
    tag = ENERGY_SALE_TAG,
    params(
        ("station_id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Energy sales of the station", body = Vec<EnergySaleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_energy_sales_after_station(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let station_id = parse_path(path)?;

    let sales = EnergySaleController::new(&state.db)
        .find_by_station(station_id)
        .await?;

    Ok(Json(
        sales
            .into_iter()
            .map(EnergySale::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Sum the energy sold per day, month or year.
///
/// Sales of every station are grouped by their timestamp truncated to the requested
/// period and summed. Buckets are ordered by period ascending.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `period` - One of `daily`, `monthly` or `yearly`
///
/// # Returns
/// - `200 OK` - Array of `{ "period", "energy_sold" }`
/// - `400 Bad Request` - Unknown period
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/energy-sales/calculate-energy-sold/{type}",
    tag = ENERGY_SALE_TAG,
    params(
        ("type" = String, Path, description = "Aggregation period: daily, monthly or yearly")
    ),
    responses(
        (status = 200, description = "Energy sold per period", body = Vec<EnergySoldDto>),
        (status = 400, description = "Unknown period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate_energy_sold(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let period: SalePeriod = period.parse()?;

    let totals = EnergySaleController::new(&state.db)
        .energy_sold_by_period(period)
        .await?;

    Ok(Json(
        totals
            .into_iter()
            .map(EnergySoldByPeriod::into_dto)
            .collect::<Vec<_>>(),
    ))
}

pub fn router() -> Router<AppState> {
    crud_routes::<EnergySaleResource>()
        .route(
            "/energy-sales/get-energy-sales-after-station/{station_id}",
            get(get_energy_sales_after_station),
        )
        .route(
            "/energy-sales/calculate-energy-sold/{type}",
            get(calculate_energy_sold),
        )
}
