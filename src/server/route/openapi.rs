use axum::{routing::get, Json, Router};
use utoipa::{
    openapi::{
        path::{OperationBuilder, ParameterBuilder, ParameterIn},
        request_body::RequestBodyBuilder,
        ArrayBuilder, Content, HttpMethod, Object, Paths, Ref, RefOr, Required, Response,
        ResponseBuilder, Schema, Type,
    },
    OpenApi, ToSchema,
};

use crate::{
    model::{
        api::ErrorDto, battery, battery_level, battery_producer, energy_sale, location, owner,
        owner_has_station, panel_angle, panel_production, panel_type, solar_panel, station,
    },
    server::{
        model::{
            battery::BatteryResource, battery_level::BatteryLevelResource,
            battery_producer::BatteryProducerResource, energy_sale::EnergySaleResource,
            location::LocationResource, owner::OwnerResource,
            owner_has_station::OwnerHasStationResource, panel_angle::PanelAngleResource,
            panel_production::PanelProductionResource, panel_type::PanelTypeResource,
            solar_panel::SolarPanelResource, station::StationResource,
        },
        route::{self, crud::RestResource},
        state::AppState,
    },
};

/// Annotated endpoints and every DTO schema of the registry.
///
/// The generic CRUD routes are added per resource by [`api_doc`].
#[derive(OpenApi)]
#[openapi(
    info(title = "Solar Registry API"),
    paths(
        route::battery::get_batteries_after_station,
        route::battery_level::get_battery_levels_after_battery,
        route::solar_panel::get_solar_panels_after_panel_type,
        route::solar_panel::get_solar_panels_after_station,
        route::panel_angle::get_panel_angles_after_solar_panel,
        route::panel_production::get_panel_productions_after_solar_panel,
        route::station::get_stations_after_location,
        route::location::create_location,
        route::owner_has_station::create_owner_has_station,
        route::owner_has_station::get_owners_after_station,
        route::owner_has_station::get_stations_after_owner,
        route::energy_sale::get_energy_sales_after_station,
        route::energy_sale::calculate_energy_sold,
        route::health::health,
    ),
    components(schemas(
        ErrorDto,
        battery::BatteryDto,
        battery::BatteryInputDto,
        battery::PatchBatteryDto,
        battery_level::BatteryLevelDto,
        battery_level::BatteryLevelInputDto,
        battery_level::PatchBatteryLevelDto,
        battery_producer::BatteryProducerDto,
        battery_producer::BatteryProducerInputDto,
        battery_producer::PatchBatteryProducerDto,
        energy_sale::EnergySaleDto,
        energy_sale::EnergySaleInputDto,
        energy_sale::PatchEnergySaleDto,
        energy_sale::EnergySoldDto,
        location::LocationDto,
        location::LocationInputDto,
        location::PatchLocationDto,
        owner::OwnerDto,
        owner::OwnerInputDto,
        owner::PatchOwnerDto,
        owner_has_station::OwnerHasStationDto,
        owner_has_station::OwnerHasStationInputDto,
        owner_has_station::PatchOwnerHasStationDto,
        panel_angle::PanelAngleDto,
        panel_angle::PanelAngleInputDto,
        panel_angle::PatchPanelAngleDto,
        panel_production::PanelProductionDto,
        panel_production::PanelProductionInputDto,
        panel_production::PatchPanelProductionDto,
        panel_type::PanelTypeDto,
        panel_type::PanelTypeInputDto,
        panel_type::PatchPanelTypeDto,
        solar_panel::SolarPanelDto,
        solar_panel::SolarPanelInputDto,
        solar_panel::PatchSolarPanelDto,
        station::StationDto,
        station::StationInputDto,
        station::PatchStationDto,
    ))
)]
pub struct ApiDoc;

/// Builds the complete OpenAPI document.
///
/// Annotated operations take precedence over the generated CRUD operations on the same
/// path and method, so the dedicated Location and OwnerHasStation inserts keep their own
/// description.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut generated = Paths::new();
    add_crud_paths::<LocationResource>(&mut generated);
    add_crud_paths::<StationResource>(&mut generated);
    add_crud_paths::<OwnerResource>(&mut generated);
    add_crud_paths::<OwnerHasStationResource>(&mut generated);
    add_crud_paths::<BatteryProducerResource>(&mut generated);
    add_crud_paths::<BatteryResource>(&mut generated);
    add_crud_paths::<BatteryLevelResource>(&mut generated);
    add_crud_paths::<PanelTypeResource>(&mut generated);
    add_crud_paths::<SolarPanelResource>(&mut generated);
    add_crud_paths::<PanelAngleResource>(&mut generated);
    add_crud_paths::<PanelProductionResource>(&mut generated);
    add_crud_paths::<EnergySaleResource>(&mut generated);

    let mut doc = ApiDoc::openapi();
    doc.paths.merge(generated);
    doc
}

/// Adds the six generic operations of `R` to `paths`.
fn add_crud_paths<R: RestResource>(paths: &mut Paths) {
    let item_path = format!("{}/{{id}}", R::PATH);
    let dto = Ref::from_schema_name(R::Dto::name());

    paths.add_path_operation(
        R::PATH,
        vec![HttpMethod::Get],
        OperationBuilder::new()
            .tag(R::TAG)
            .operation_id(Some(format!("find_all_{}", R::TAG)))
            .summary(Some(format!("List every {}", R::NAME)))
            .response(
                "200",
                json_response(
                    &format!("All {} rows ordered by id", R::NAME),
                    ArrayBuilder::new().items(dto.clone()).build(),
                ),
            )
            .response("500", error_response("Internal server error")),
    );

    paths.add_path_operation(
        R::PATH,
        vec![HttpMethod::Post],
        OperationBuilder::new()
            .tag(R::TAG)
            .operation_id(Some(format!("create_{}", R::TAG)))
            .summary(Some(format!("Create a {}", R::NAME)))
            .request_body(Some(json_body(R::InputDto::name().into_owned())))
            .response("201", json_response("Created row", dto.clone()))
            .response("400", error_response("Invalid body or unknown reference"))
            .response("500", error_response("Internal server error")),
    );

    paths.add_path_operation(
        &item_path,
        vec![HttpMethod::Get],
        OperationBuilder::new()
            .tag(R::TAG)
            .operation_id(Some(format!("find_{}_by_id", R::TAG)))
            .summary(Some(format!("Get a {} by id", R::NAME)))
            .parameter(id_parameter())
            .response("200", json_response("Requested row", dto))
            .response("400", error_response("Invalid id"))
            .response("404", error_response("No row with that id"))
            .response("500", error_response("Internal server error")),
    );

    paths.add_path_operation(
        &item_path,
        vec![HttpMethod::Put],
        OperationBuilder::new()
            .tag(R::TAG)
            .operation_id(Some(format!("update_{}", R::TAG)))
            .summary(Some(format!("Replace a {}", R::NAME)))
            .parameter(id_parameter())
            .request_body(Some(json_body(R::InputDto::name().into_owned())))
            .response("200", text_response(&format!("{} updated", R::NAME)))
            .response("400", error_response("Invalid id, body or reference"))
            .response("404", error_response("No row with that id"))
            .response("500", error_response("Internal server error")),
    );

    paths.add_path_operation(
        &item_path,
        vec![HttpMethod::Patch],
        OperationBuilder::new()
            .tag(R::TAG)
            .operation_id(Some(format!("patch_{}", R::TAG)))
            .summary(Some(format!("Change some fields of a {}", R::NAME)))
            .parameter(id_parameter())
            .request_body(Some(json_body(R::PatchDto::name().into_owned())))
            .response("200", text_response(&format!("{} updated", R::NAME)))
            .response("400", error_response("Invalid id, body or reference"))
            .response("404", error_response("No row with that id"))
            .response("500", error_response("Internal server error")),
    );

    paths.add_path_operation(
        &item_path,
        vec![HttpMethod::Delete],
        OperationBuilder::new()
            .tag(R::TAG)
            .operation_id(Some(format!("delete_{}", R::TAG)))
            .summary(Some(format!("Delete a {}", R::NAME)))
            .parameter(id_parameter())
            .response("200", text_response(&format!("{} deleted", R::NAME)))
            .response("400", error_response("Invalid id"))
            .response("404", error_response("No row with that id"))
            .response("500", error_response("Internal server error")),
    );
}

fn id_parameter() -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Row ID"))
        .schema(Some(Object::with_type(Type::Integer)))
}

fn json_body(schema_name: String) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            Content::new(Some(Ref::from_schema_name(schema_name))),
        )
        .required(Some(Required::True))
        .build()
}

fn json_response(description: &str, schema: impl Into<RefOr<Schema>>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", Content::new(Some(schema)))
        .build()
}

fn text_response(example: &str) -> Response {
    ResponseBuilder::new()
        .description(format!("Plain text \"{}\"", example))
        .content(
            "text/plain",
            Content::new(Some(Object::with_type(Type::String))),
        )
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, Ref::from_schema_name(ErrorDto::name()))
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
