use super::*;

const PREFIXES: [&str; 12] = [
    "/locations",
    "/stations",
    "/owners",
    "/owner-has-stations",
    "/battery-producers",
    "/batteries",
    "/battery-levels",
    "/panel-types",
    "/solar-panels",
    "/panel-angles",
    "/panel-productions",
    "/energy-sales",
];

/// Tests listing a collection.
///
/// Expected: 200 with every owner in id order
#[tokio::test]
async fn lists_owners_in_id_order() -> Result<(), AppError> {
    let (app, db) = app().await;
    let first = factory::create_owner(&db).await?;
    let second = factory::create_owner(&db).await?;

    let (status, body) = send(&app, Method::GET, "/owners", None).await;

    assert_eq!(status, StatusCode::OK);
    let owners: Vec<OwnerDto> = parse(&body);
    assert_eq!(
        owners.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests that an unknown id answers 404 on every resource.
///
/// Expected: 404 with an ErrorDto body for each path prefix
#[tokio::test]
async fn unknown_id_is_not_found_for_every_resource() -> Result<(), AppError> {
    let (app, _db) = app().await;

    for prefix in PREFIXES {
        let (status, body) = send(&app, Method::GET, &format!("{}/4242", prefix), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}/4242", prefix);
        let error: ErrorDto = parse(&body);
        assert!(error.error.contains("4242"));
    }

    Ok(())
}

/// Tests that every resource is mounted with its generic handlers.
///
/// Expected: 200 with an empty array for the collection of each path prefix
#[tokio::test]
async fn every_resource_lists_an_empty_collection() -> Result<(), AppError> {
    let (app, _db) = app().await;

    for prefix in PREFIXES {
        let (status, body) = send(&app, Method::GET, prefix, None).await;

        assert_eq!(status, StatusCode::OK, "GET {}", prefix);
        assert!(parse::<Vec<Value>>(&body).is_empty());
    }

    Ok(())
}

/// Tests ids that are not numbers or overflow an `i32`.
///
/// Expected: 400 with an ErrorDto body, for reads and writes alike
#[tokio::test]
async fn malformed_id_is_bad_request() -> Result<(), AppError> {
    let (app, _db) = app().await;

    for uri in ["/stations/abc", "/stations/99999999999", "/batteries/get-batteries-after-station/x"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "GET {}", uri);
        let error: ErrorDto = parse(&body);
        assert!(!error.error.is_empty());
    }

    let (status, body) = send(&app, Method::DELETE, "/owners/-x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let _: ErrorDto = parse(&body);

    Ok(())
}
