use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{route, state::AppState};

/// Routes of every resource plus the health and OpenAPI endpoints, without state.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(route::location::router())
        .merge(route::station::router())
        .merge(route::owner::router())
        .merge(route::owner_has_station::router())
        .merge(route::battery_producer::router())
        .merge(route::battery::router())
        .merge(route::battery_level::router())
        .merge(route::panel_type::router())
        .merge(route::solar_panel::router())
        .merge(route::panel_angle::router())
        .merge(route::panel_production::router())
        .merge(route::energy_sale::router())
        .merge(route::health::router())
        .merge(route::openapi::router())
}

/// Builds the served application: all routes bound to `state` with request tracing and
/// permissive CORS.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
