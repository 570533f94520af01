use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use marketparty::server::controller::party::create_party;

use super::*;

/// Expect 201 Created for a valid party
#[tokio::test]
async fn created_for_valid_request() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let result = create_party(
        State(test.to_app_state()),
        test.session.clone(),
        Json(create_request(3)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request when the time window is reversed
#[tokio::test]
async fn bad_request_for_reversed_time_range() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let mut request = create_request(3);
    request.end_time = "03-12 08:00".to_string();

    let result = create_party(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request for an unparsable start time
#[tokio::test]
async fn bad_request_for_malformed_time() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let mut request = create_request(3);
    request.start_time = "tomorrow morning".to_string();

    let result = create_party(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for an item that does not exist
#[tokio::test]
async fn not_found_for_unknown_item() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let mut request = create_request(3);
    request.item_id = 99;

    let result = create_party(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when no user is in the session
#[tokio::test]
async fn not_found_without_session_user() -> Result<(), TestError> {
    let test = setup().await?;

    let result = create_party(
        State(test.to_app_state()),
        test.session.clone(),
        Json(create_request(3)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}
