use super::*;

/// Tests the health endpoint against a live database.
///
/// Expected: 200 "OK"
#[tokio::test]
async fn health_reports_ok() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "OK");
}

/// Tests that the OpenAPI document lists the DTO schemas, the filter paths and the
/// generic CRUD operations of every resource.
///
/// Expected: 200 with StationDto among the schemas, the aggregate path present, six
/// operations per resource and the annotated location insert kept
#[tokio::test]
async fn serves_openapi_document() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = parse(&body);
    assert!(doc["components"]["schemas"]["StationDto"].is_object());
    assert!(doc["components"]["schemas"]["EnergySoldDto"].is_object());
    assert!(doc["paths"]["/energy-sales/calculate-energy-sold/{type}"].is_object());

    let paths = &doc["paths"];
    for (collection, item) in [
        ("/stations", "/stations/{id}"),
        ("/owners", "/owners/{id}"),
        ("/battery-producers", "/battery-producers/{id}"),
        ("/energy-sales", "/energy-sales/{id}"),
    ] {
        assert!(paths[collection]["get"].is_object(), "GET {}", collection);
        assert!(paths[collection]["post"].is_object(), "POST {}", collection);
        for method in ["get", "put", "patch", "delete"] {
            assert!(paths[item][method].is_object(), "{} {}", method, item);
        }
    }

    assert_eq!(
        paths["/stations/{id}"]["get"]["responses"]["200"]["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/StationDto"
    );
    assert_eq!(paths["/locations"]["post"]["operationId"], "create_location");
    assert!(paths["/locations"]["get"].is_object());
}
