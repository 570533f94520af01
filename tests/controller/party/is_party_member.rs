use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::party_member::InviteStatus;
use marketparty::server::controller::party::is_party_member;

use super::*;

/// Expect 200 OK for a pending member
#[tokio::test]
async fn ok_for_pending_member() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    test.party()
        .insert_member(party.id, 2, InviteStatus::Pending)
        .await?;
    sign_in(&test, 2).await;

    let result =
        is_party_member(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["is_member"], true);

    Ok(())
}

/// Expect 200 OK for a user without a membership
#[tokio::test]
async fn ok_for_stranger() -> Result<(), TestError> {
    let test = setup().await?;
    let party = test.party().insert_party(1, 1, 3).await?;
    sign_in(&test, 3).await;

    let result =
        is_party_member(State(test.to_app_state()), test.session.clone(), Path(party.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["is_member"], false);

    Ok(())
}

/// Expect 404 Not Found for a party that does not exist
#[tokio::test]
async fn not_found_for_unknown_party() -> Result<(), TestError> {
    let test = setup().await?;
    sign_in(&test, 1).await;

    let result = is_party_member(State(test.to_app_state()), test.session.clone(), Path(42)).await;

    assert!(result.is_err());
    assert_eq!(error_status(result.err().unwrap()), StatusCode::NOT_FOUND);

    Ok(())
}
