use axum::{extract::State, http::StatusCode, response::IntoResponse};
use marketparty::server::controller::party::get_nearby_parties;

use super::*;

/// Expect 200 OK for a user with a registered location
#[tokio::test]
async fn ok_for_located_user() -> Result<(), TestError> {
    let test = setup().await?;
    let shopper = test
        .user()
        .insert_user_at("nearby@example.com", TEST_LATITUDE, TEST_LONGITUDE)
        .await?;
    test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, shopper.id).await;

    let result = get_nearby_parties(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request for a user without a registered location
#[tokio::test]
async fn bad_request_without_location() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 2).await;

    let result = get_nearby_parties(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::BAD_REQUEST);

    Ok(())
}
