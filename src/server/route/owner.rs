use axum::Router;

use crate::{
    model::owner::{OwnerDto, OwnerInputDto, PatchOwnerDto},
    server::{
        model::owner::{Owner, OwnerResource},
        route::crud::{crud_routes, RestResource},
        state::AppState,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub const OWNER_TAG: &str = "owner";

impl RestResource for OwnerResource {
    const PATH: &'static str = "/owners";
    const TAG: &'static str = OWNER_TAG;

    type Dto = OwnerDto;
    type InputDto = OwnerInputDto;
    type PatchDto = PatchOwnerDto;

    fn into_dto(domain: Owner) -> OwnerDto {
        domain.into_dto()
    }
}

pub fn router() -> Router<AppState> {
    crud_routes::<OwnerResource>()
}
