use axum::Router;

use crate::{
    model::battery_producer::{
        BatteryProducerDto, BatteryProducerInputDto, PatchBatteryProducerDto,
    },
    server::{
        model::battery_producer::{BatteryProducer, BatteryProducerResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
    },
};

/// Tag for grouping battery producer endpoints in OpenAPI documentation
pub const BATTERY_PRODUCER_TAG: &str = "battery-producer";

impl RestResource for BatteryProducerResource {
    const PATH: &'static str = "/battery-producers";
    const TAG: &'static str = BATTERY_PRODUCER_TAG;

    type Dto = BatteryProducerDto;
    type InputDto = BatteryProducerInputDto;
    type PatchDto = PatchBatteryProducerDto;

    fn into_dto(domain: BatteryProducer) -> BatteryProducerDto {
        domain.into_dto()
    }
}

pub fn router() -> Router<AppState> {
    crud_routes::<BatteryProducerResource>()
}
