use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::party::PartyStatus;
use marketparty::server::controller::party::update_party;

use super::*;

/// Expect 200 OK when the leader updates a recruiting party
#[tokio::test]
async fn ok_for_leader() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 1).await;

    let result = update_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        Json(update_request(4)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden when someone other than the leader updates the party
#[tokio::test]
async fn forbidden_for_non_leader() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 2).await;

    let result = update_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        Json(update_request(4)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 409 Conflict when the party was canceled
#[tokio::test]
async fn conflict_for_canceled_party() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    let party = test.party().set_status(party, PartyStatus::Canceled).await?;
    sign_in(&test, 1).await;

    let result = update_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        Json(update_request(4)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request for a non-positive member count
#[tokio::test]
async fn bad_request_for_zero_members() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 1).await;

    let result = update_party(
        State(test.to_app_state()),
        test.session.clone(),
        Path(party.id),
        Json(update_request(0)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::BAD_REQUEST);

    Ok(())
}
