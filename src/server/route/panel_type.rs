use axum::Router;

use crate::{
    model::panel_type::{PanelTypeDto, PanelTypeInputDto, PatchPanelTypeDto},
    server::{
        model::panel_type::{PanelType, PanelTypeResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
    },
};

/// Tag for grouping panel type endpoints in OpenAPI documentation
pub const PANEL_TYPE_TAG: &str = "panel-type";

impl RestResource for PanelTypeResource {
    const PATH: &'static str = "/panel-types";
    const TAG: &'static str = PANEL_TYPE_TAG;

    type Dto = PanelTypeDto;
    type InputDto = PanelTypeInputDto;
    type PatchDto = PatchPanelTypeDto;

    fn into_dto(domain: PanelType) -> PanelTypeDto {
        domain.into_dto()
    }
}

pub fn router() -> Router<AppState> {
    crud_routes::<PanelTypeResource>()
}
