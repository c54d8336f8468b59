use super::*;

/// Tests deleting a row over HTTP.
///
/// Expected: 200 "Location deleted", then 404 on GET and on a second DELETE
#[tokio::test]
async fn deletes_location_then_not_found() -> Result<(), AppError> {
    let (app, db) = app().await;
    let location = factory::create_location(&db).await?;
    let uri = format!("/locations/{}", location.id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Location deleted");

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
