//! Handlers shared by every resource.
//!
//! For a resource mounted at `/{resource}` the generic handlers serve:
//!
//! - `GET /{resource}` - 200 with a JSON array of every row
//! - `POST /{resource}` - 201 with the created row as JSON
//! - `GET /{resource}/{id}` - 200 with the row as JSON
//! - `PUT /{resource}/{id}` - 200 with `"<Entity> updated"`
//! - `PATCH /{resource}/{id}` - 200 with `"<Entity> updated"`
//! - `DELETE /{resource}/{id}` - 200 with `"<Entity> deleted"`
//!
//! Missing ids answer 404; malformed ids and bodies answer 400. Both carry an `ErrorDto`
//! body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

use crate::server::{
    controller::crud::CrudController, data::crud::Resource, error::AppError, state::AppState,
    util::parse::{parse_json, parse_path},
};

/// A [`Resource`] exposed over HTTP.
pub trait RestResource: Resource {
    /// Path prefix the resource is mounted at, e.g. `"/stations"`.
    const PATH: &'static str;
    /// OpenAPI tag the resource's operations are grouped under.
    const TAG: &'static str;

    /// Response body for a single row.
    type Dto: Serialize + ToSchema + Send;
    /// Request body of POST and PUT.
    type InputDto: DeserializeOwned + ToSchema + Send + Into<Self::Fields>;
    /// Request body of PATCH.
    type PatchDto: DeserializeOwned + ToSchema + Send + Into<Self::Patch>;

    fn into_dto(domain: Self::Domain) -> Self::Dto;
}

pub async fn find_all<R: RestResource>(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = CrudController::<R>::new(&state.db).find_all().await?;

    Ok(Json(rows.into_iter().map(R::into_dto).collect::<Vec<_>>()))
}

pub async fn find_by_id<R: RestResource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path(path)?;

    let row = CrudController::<R>::new(&state.db).find_by_id(id).await?;

    Ok(Json(R::into_dto(row)))
}

pub async fn create<R: RestResource>(
    State(state): State<AppState>,
    payload: Result<Json<R::InputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = parse_json(payload)?;

    let created = CrudController::<R>::new(&state.db)
        .create(dto.into())
        .await?;

    Ok((StatusCode::CREATED, Json(R::into_dto(created))))
}

pub async fn update<R: RestResource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<R::InputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path(path)?;
    let dto = parse_json(payload)?;

    CrudController::<R>::new(&state.db)
        .update(id, dto.into())
        .await?;

    Ok(format!("{} updated", R::NAME))
}

pub async fn patch<R: RestResource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<R::PatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path(path)?;
    let dto = parse_json(payload)?;

    CrudController::<R>::new(&state.db)
        .patch(id, dto.into())
        .await?;

    Ok(format!("{} updated", R::NAME))
}

pub async fn delete<R: RestResource>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path(path)?;

    CrudController::<R>::new(&state.db).delete(id).await?;

    Ok(format!("{} deleted", R::NAME))
}

/// `GET` and `POST` on the collection path.
pub fn collection_routes<R: RestResource>() -> Router<AppState> {
    Router::new().route(R::PATH, get(find_all::<R>).post(create::<R>))
}

/// `GET`, `PUT`, `PATCH` and `DELETE` on `{PATH}/{id}`.
pub fn item_routes<R: RestResource>() -> Router<AppState> {
    Router::new().route(
        &format!("{}/{{id}}", R::PATH),
        get(find_by_id::<R>)
            .put(update::<R>)
            .patch(patch::<R>)
            .delete(delete::<R>),
    )
}

/// All six generic routes of a resource.
pub fn crud_routes<R: RestResource>() -> Router<AppState> {
    collection_routes::<R>().merge(item_routes::<R>())
}
