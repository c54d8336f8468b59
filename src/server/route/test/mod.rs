use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, router, state::AppState},
};
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod energy_sale;
mod health;

/// Builds the application on top of an in-memory database holding every table.
async fn app() -> (Router, sea_orm::DatabaseConnection) {
    let mut test = TestBuilder::new().with_solar_tables().build().await.unwrap();
    let db = test.db.take().unwrap();

    (router::app(AppState::new(db.clone())), db)
}

/// Sends one request and returns the status with the raw response body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

fn text(body: &[u8]) -> String {
    String::from_utf8(body.to_vec()).unwrap()
}
